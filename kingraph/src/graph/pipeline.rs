//! The full normalization pipeline.
//!
//! Synchronous and allocation-only: raw records → canonicalize → suppress
//! opposites → expand/classify → deduplicate → allocate curvature → compute
//! node degree and size. Invoked wholesale on every source fetch or edit
//! save; concurrent invocations on different record sets are independent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::config::GraphConfig;
use crate::graph::{allocate_curvature, compute_nodes, expand};
use crate::models::{Character, DirectedEdge, GraphNode, RelationshipRecord};

/// The renderable graph: what the force-directed renderer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<DirectedEdge>,
}

impl RelationshipGraph {
    /// Edges participating in rendering and degree counts
    pub fn visible_edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.edges.iter().filter(|e| e.visualize)
    }
}

/// Relationship graph normalizer
///
/// Holds a validated configuration and turns raw character/relationship data
/// into a [`RelationshipGraph`].
#[derive(Debug, Clone)]
pub struct GraphNormalizer {
    config: GraphConfig,
}

impl GraphNormalizer {
    /// Create a normalizer with the given configuration
    pub fn new(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Normalize a record set into a renderable graph.
    ///
    /// Pure over its inputs; the previous graph is discarded, not diffed.
    pub fn normalize(
        &self,
        characters: &[Character],
        records: &[RelationshipRecord],
    ) -> RelationshipGraph {
        let mut edges = expand(records, &self.config);
        allocate_curvature(&mut edges, &self.config);
        let nodes = compute_nodes(characters, &edges, &self.config);

        debug!(
            records = records.len(),
            edges = edges.len(),
            nodes = nodes.len(),
            "normalized relationship graph"
        );

        RelationshipGraph { nodes, edges }
    }

    /// Normalize a roster whose relationship records are nested per
    /// character, as served by the character API
    pub fn normalize_roster(&self, roster: &[Character]) -> RelationshipGraph {
        let records = Character::collect_records(roster);
        self.normalize(roster, &records)
    }
}

impl Default for GraphNormalizer {
    fn default() -> Self {
        // The default configuration always validates.
        Self {
            config: GraphConfig::default(),
        }
    }
}
