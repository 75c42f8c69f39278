//! Expansion of relationship records into directed display edges.
//!
//! Duplicate records are dropped before expansion, then each survivor yields
//! 0-2 directed edges: the forward edge always, the reverse edge only when
//! canonicalization did not merge the pair. Edges left blank after all label
//! transforms are discarded. Every emitted edge carries its classified color
//! and dash style.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::GraphConfig;
use crate::label::{canonicalize, classify, normalize, suppress_opposites};
use crate::models::{DirectedEdge, RelationshipRecord};

/// Substrings marking a relation with no direct blood/legal tie, or one no
/// longer active; such edges render dashed
const DASH_MARKERS: &[&str] = &[
    "step-",
    "step ",
    "foster-",
    "foster ",
    "half-",
    "half ",
    "adoptive-",
    "adoptive ",
    "ex-",
    "ex ",
    "former-",
    "former ",
    "crush",
    "relative",
    "love interest",
    "harem candidate",
    "divorced",
];

/// Expand records into deduplicated directed edges with color and dash
/// assigned
pub fn expand(records: &[RelationshipRecord], config: &GraphConfig) -> Vec<DirectedEdge> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for record in records {
        let key = dedup_key(record);
        if !seen.insert(key) {
            warn!(
                from_id = record.from_id,
                to_id = record.to_id,
                "dropping duplicate relationship record"
            );
            continue;
        }

        let canonicalized = canonicalize(
            record.relationship_type.as_deref(),
            record.reciprocal_relationship_type.as_deref(),
        );
        let (forward, reverse) = suppress_opposites(
            canonicalized.forward.as_deref(),
            canonicalized.reverse.as_deref(),
        );

        if let Some(edge) = build_edge(
            record.from_id,
            record.to_id,
            forward.as_deref(),
            canonicalized.merged,
            record.visualize,
            config,
        ) {
            edges.push(edge);
        }
        if !canonicalized.merged {
            if let Some(edge) = build_edge(
                record.to_id,
                record.from_id,
                reverse.as_deref(),
                false,
                record.visualize,
                config,
            ) {
                edges.push(edge);
            }
        }
    }

    debug!(records = records.len(), edges = edges.len(), "expanded records");
    edges
}

/// Build a single directed edge, or nothing when the label is blank
fn build_edge(
    source: i64,
    target: i64,
    label: Option<&str>,
    same_labels: bool,
    visualize: bool,
    config: &GraphConfig,
) -> Option<DirectedEdge> {
    let label = label?.trim();
    if label.is_empty() {
        return None;
    }

    let classification = classify(label, &config.palette);
    Some(DirectedEdge {
        source,
        target,
        label: label.to_string(),
        color: classification.color,
        dashed: is_dashed(label),
        same_labels,
        curvature: 0.0,
        visualize,
    })
}

/// Duplicate detection key: unordered pair plus the label assignment, with
/// swapped orientations colliding
fn dedup_key(record: &RelationshipRecord) -> String {
    let forward = record
        .relationship_type
        .as_deref()
        .map(|l| normalize(l))
        .unwrap_or_default();
    let reverse = record
        .reciprocal_relationship_type
        .as_deref()
        .map(|l| normalize(l))
        .unwrap_or_default();

    if record.from_id <= record.to_id {
        format!("{}|{}|{}|{}", record.from_id, record.to_id, forward, reverse)
    } else {
        format!("{}|{}|{}|{}", record.to_id, record.from_id, reverse, forward)
    }
}

/// Whether a label renders dashed. A `{relationship}` placeholder token is
/// removed before matching.
fn is_dashed(label: &str) -> bool {
    let cleaned = normalize(&label.replace("{relationship}", ""));
    DASH_MARKERS.iter().any(|marker| cleaned.contains(marker))
}
