//! Client-side relationship edit sessions.
//!
//! While relationships are being authored, records have no persistent id
//! yet, so each draft carries a session-local `temp_id` used purely for list
//! identity. Ids are handed out sequentially at append time and are never
//! reused or renumbered within a session; lookups go through `temp_id`, not
//! position. On save the whole record array is submitted and the server
//! decides the diff.

use serde::{Deserialize, Serialize};

use crate::models::RelationshipRecord;
use crate::{KingraphError, Result};

/// A relationship record being edited, wrapped with its session identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRelationship {
    /// Session-local list identity; never persisted
    pub temp_id: u32,
    pub record: RelationshipRecord,
}

/// An in-progress relationship editing session for one character
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    drafts: Vec<DraftRelationship>,
    next_temp_id: u32,
}

impl EditSession {
    /// Start a session from the character's stored records, assigning
    /// sequential temp ids
    pub fn new(records: Vec<RelationshipRecord>) -> Self {
        let drafts: Vec<DraftRelationship> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| DraftRelationship {
                temp_id: index as u32,
                record,
            })
            .collect();
        let next_temp_id = drafts.len() as u32;
        Self {
            drafts,
            next_temp_id,
        }
    }

    /// Append a blank draft between two characters and return its temp id.
    ///
    /// Labels start null and the draft is visible; the endpoint ids are
    /// stored smaller-first, matching the storage convention.
    pub fn add_blank(&mut self, character_a: i64, character_b: i64) -> u32 {
        let (from_id, to_id) = if character_a <= character_b {
            (character_a, character_b)
        } else {
            (character_b, character_a)
        };

        let temp_id = self.next_temp_id;
        self.next_temp_id += 1;
        self.drafts.push(DraftRelationship {
            temp_id,
            record: RelationshipRecord::new(from_id, to_id, None, None),
        });
        temp_id
    }

    /// Update a draft's labels and visibility by temp id
    pub fn update(
        &mut self,
        temp_id: u32,
        forward: Option<&str>,
        reverse: Option<&str>,
        visualize: bool,
    ) -> Result<()> {
        let draft = self.draft_mut(temp_id)?;
        draft.record.relationship_type = forward.map(str::to_string);
        draft.record.reciprocal_relationship_type = reverse.map(str::to_string);
        draft.record.visualize = visualize;
        Ok(())
    }

    /// Remove a draft by temp id. Remaining drafts keep their ids.
    pub fn remove(&mut self, temp_id: u32) -> Result<()> {
        let before = self.drafts.len();
        self.drafts.retain(|d| d.temp_id != temp_id);
        if self.drafts.len() == before {
            return Err(KingraphError::Session(format!(
                "no draft with temp id {temp_id}"
            )));
        }
        Ok(())
    }

    /// Get a draft by temp id
    pub fn get(&self, temp_id: u32) -> Option<&DraftRelationship> {
        self.drafts.iter().find(|d| d.temp_id == temp_id)
    }

    /// All drafts in list order
    pub fn drafts(&self) -> &[DraftRelationship] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Consume the session into the record array submitted on save, with the
    /// session identities stripped
    pub fn into_records(self) -> Vec<RelationshipRecord> {
        self.drafts.into_iter().map(|d| d.record).collect()
    }

    fn draft_mut(&mut self, temp_id: u32) -> Result<&mut DraftRelationship> {
        self.drafts
            .iter_mut()
            .find(|d| d.temp_id == temp_id)
            .ok_or_else(|| KingraphError::Session(format!("no draft with temp id {temp_id}")))
    }
}
