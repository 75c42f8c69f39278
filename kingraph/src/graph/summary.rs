//! Per-partner relationship summaries for the profile list view.
//!
//! The profile page groups a character's records by the other endpoint and
//! shows, per partner, the labels describing how the partner relates to the
//! viewed character, each with its classified color. Partners whose labels
//! are all null are grouped but show nothing.

use crate::config::GraphConfig;
use crate::label::{classify, sort_for_display};
use crate::models::RelationshipRecord;

/// One labeled entry in a partner's summary; the label may be null for a
/// half-filled record
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub label: Option<String>,
    pub color: String,
}

/// All relationship labels between the viewed character and one partner
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipSummary {
    pub partner_id: i64,
    pub entries: Vec<SummaryEntry>,
}

impl RelationshipSummary {
    /// Number of entries with an actual label
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.label.is_some()).count()
    }

    /// Non-null labels in display priority order
    pub fn display_labels(&self) -> Vec<String> {
        let labels: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| e.label.clone())
            .collect();
        sort_for_display(&labels)
    }
}

/// Group a character's records by partner, picking per record the label that
/// describes the partner's relation to the viewed character.
///
/// Partners appear in first-encounter order; records not involving the
/// character are skipped.
pub fn summarize_for(
    character_id: i64,
    records: &[RelationshipRecord],
    config: &GraphConfig,
) -> Vec<RelationshipSummary> {
    let mut summaries: Vec<RelationshipSummary> = Vec::new();

    for record in records {
        let Some(partner_id) = record.other_endpoint(character_id) else {
            continue;
        };
        // relationship_type describes to_id's relation to from_id, so the
        // partner-side label flips with the record orientation.
        let label = if record.to_id == character_id {
            record.relationship_type.as_deref()
        } else {
            record.reciprocal_relationship_type.as_deref()
        };

        let entry = SummaryEntry {
            label: label.map(str::to_string),
            color: classify(label.unwrap_or_default(), &config.palette).color,
        };

        match summaries.iter_mut().find(|s| s.partner_id == partner_id) {
            Some(summary) => summary.entries.push(entry),
            None => summaries.push(RelationshipSummary {
                partner_id,
                entries: vec![entry],
            }),
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GraphConfig {
        GraphConfig::default()
    }

    #[test]
    fn test_groups_by_partner() {
        let records = vec![
            RelationshipRecord::new(1, 2, Some("brother"), Some("sister")),
            RelationshipRecord::new(1, 2, Some("rival"), Some("rival")),
            RelationshipRecord::new(1, 3, Some("friend"), Some("friend")),
        ];
        let summaries = summarize_for(2, &records, &config());

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].partner_id, 1);
        assert_eq!(summaries[0].visible_count(), 2);
    }

    #[test]
    fn test_label_orientation_flips_with_record() {
        // Viewed as character 2 (the to_id), the forward label applies.
        let records = vec![RelationshipRecord::new(1, 2, Some("mother"), Some("daughter"))];
        let summaries = summarize_for(2, &records, &config());
        assert_eq!(summaries[0].entries[0].label.as_deref(), Some("mother"));

        // Viewed as character 1 (the from_id), the reciprocal applies.
        let summaries = summarize_for(1, &records, &config());
        assert_eq!(summaries[0].entries[0].label.as_deref(), Some("daughter"));
    }

    #[test]
    fn test_null_labels_grouped_but_not_counted() {
        let records = vec![RelationshipRecord::new(1, 2, None, Some("friend"))];
        let summaries = summarize_for(2, &records, &config());

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].entries.len(), 1);
        assert_eq!(summaries[0].visible_count(), 0);
    }

    #[test]
    fn test_display_labels_sorted_by_priority() {
        let records = vec![
            RelationshipRecord::new(1, 2, Some("rival"), None),
            RelationshipRecord::new(1, 2, Some("mother"), None),
        ];
        let summaries = summarize_for(2, &records, &config());
        assert_eq!(
            summaries[0].display_labels(),
            vec!["mother".to_string(), "rival".to_string()]
        );
    }

    #[test]
    fn test_unrelated_records_skipped() {
        let records = vec![RelationshipRecord::new(3, 4, Some("friend"), None)];
        assert!(summarize_for(1, &records, &config()).is_empty());
    }
}
