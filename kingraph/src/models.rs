//! Data model shared across the engine: input records as served by the
//! character API and output structures consumed by the renderer.
//!
//! Input tolerance lives here so the pipeline never sees it: the `visualize`
//! flag arrives as `true/false`, `1/0`, or not at all, and is normalized to a
//! strict `bool` at the serde boundary.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// A stored relationship between two characters, one per relation.
///
/// The unordered pair `{from_id, to_id}` is the actual relationship identity;
/// `from_id < to_id` is the storage convention but nothing here requires it.
/// `relationship_type` describes `to_id`'s relation to `from_id` (forward),
/// `reciprocal_relationship_type` the inverse (reverse). Labels are free
/// text: null, empty, mixed-case, and modifier-prefixed values are all valid
/// input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Persistent identifier; null while the record is being authored
    /// client-side.
    #[serde(default)]
    pub id: Option<i64>,
    pub from_id: i64,
    pub to_id: i64,
    #[serde(default, deserialize_with = "lenient_label")]
    pub relationship_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub reciprocal_relationship_type: Option<String>,
    /// Whether the relation contributes to the rendered graph and to degree
    /// counts. Absent means visible.
    #[serde(default = "default_visible", deserialize_with = "bool_or_int")]
    pub visualize: bool,
}

impl RelationshipRecord {
    /// Create a visible record with the given endpoint ids and labels
    pub fn new(from_id: i64, to_id: i64, forward: Option<&str>, reverse: Option<&str>) -> Self {
        Self {
            id: None,
            from_id,
            to_id,
            relationship_type: forward.map(str::to_string),
            reciprocal_relationship_type: reverse.map(str::to_string),
            visualize: true,
        }
    }

    /// Check if this record involves the given character
    pub fn involves(&self, character_id: i64) -> bool {
        self.from_id == character_id || self.to_id == character_id
    }

    /// Get the other endpoint of the record, if the given character is one
    pub fn other_endpoint(&self, character_id: i64) -> Option<i64> {
        if self.from_id == character_id {
            Some(self.to_id)
        } else if self.to_id == character_id {
            Some(self.from_id)
        } else {
            None
        }
    }
}

fn default_visible() -> bool {
    true
}

/// Accept `true/false`, `1/0`, or null for the `visualize` flag
fn bool_or_int<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => Ok(value),
        Some(Flag::Int(value)) => Ok(value != 0),
        None => Ok(true),
    }
}

/// Coerce malformed label values (numbers, booleans) to their string form
/// instead of failing the whole payload
fn lenient_label<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(value) => value,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
        Raw::Bool(value) => value.to_string(),
    }))
}

/// A character as served by the upstream API, with its nested relationship
/// records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    /// External asset reference; may not have resolved yet when the graph is
    /// computed.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

impl Character {
    /// Create a character with no relationships
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: None,
            image_url: None,
            relationships: Vec::new(),
        }
    }

    /// Parse a JSON array of characters as returned by the character API
    pub fn parse_roster(payload: &str) -> Result<Vec<Character>> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Collect the relationship records of a roster into one flat list
    pub fn collect_records(roster: &[Character]) -> Vec<RelationshipRecord> {
        roster
            .iter()
            .flat_map(|c| c.relationships.iter().cloned())
            .collect()
    }
}

/// A directed display edge, 0-2 per input record.
///
/// Serialized camelCase for the renderer collaborator, which honors
/// `curvature`, `dashed`, `color`, `sameLabels` (suppress the reverse
/// arrowhead), and `visualize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectedEdge {
    pub source: i64,
    pub target: i64,
    /// Non-blank display label; blank-labeled edges are discarded before
    /// they reach the output.
    pub label: String,
    pub color: String,
    pub dashed: bool,
    /// True when canonicalization merged forward and reverse into one label,
    /// so only this edge was emitted for a mutual relation.
    pub same_labels: bool,
    pub curvature: f32,
    pub visualize: bool,
}

/// A renderable node, one per character with at least one visible edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub visible_degree: usize,
    pub size: f32,
}
