//! # Kingraph
//!
//! Normalization engine that turns raw, asymmetric, duplicate-prone
//! relationship records between characters into a clean, renderable directed
//! graph: labels are canonicalized and classified, duplicate records are
//! dropped, parallel edges receive distinct curvatures, and nodes are sized
//! by their visible degree.
//!
//! The engine is a pure library boundary: input is the character set with
//! nested relationship records as served by the character API, output is an
//! edge list plus node list for a force-directed renderer. It performs no
//! I/O, owns no wire format, and recomputes the whole graph per invocation.
//!
//! ## Quick Start
//!
//! ```rust
//! use kingraph::prelude::*;
//!
//! fn example() -> Result<()> {
//!     let characters = vec![
//!         Character::new(1, "Akira"),
//!         Character::new(2, "Yui"),
//!     ];
//!     let records = vec![RelationshipRecord::new(1, 2, Some("brother"), Some("sister"))];
//!
//!     let normalizer = GraphNormalizer::new(GraphConfig::default())?;
//!     let graph = normalizer.normalize(&characters, &records);
//!
//!     // "brother"/"sister" merges into a single "sibling" edge.
//!     assert_eq!(graph.edges.len(), 1);
//!     assert_eq!(graph.edges[0].label, "sibling");
//!     assert_eq!(graph.nodes.len(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! Data flows strictly left to right through pure stages:
//! canonicalize labels → suppress opposite labels → expand to directed edges
//! with color/dash classification → deduplicate → allocate curvature →
//! compute node degree and size. Rendering, layout physics, and persistence
//! are external collaborators.

pub mod config;
pub mod graph;
pub mod label;
pub mod models;
pub mod session;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{GraphConfig, Palette};
    pub use crate::graph::{
        GraphNormalizer, RelationshipGraph, RelationshipSummary, SummaryEntry, summarize_for,
    };
    pub use crate::label::{Classification, LabelCategory, classify, sort_for_display};
    pub use crate::models::{Character, DirectedEdge, GraphNode, RelationshipRecord};
    pub use crate::session::{DraftRelationship, EditSession};
    pub use crate::{KingraphError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Kingraph operations
#[derive(Debug, thiserror::Error)]
pub enum KingraphError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed payload at the data-model boundary
    #[error("Parse error: {0}")]
    Parse(String),

    /// Errors related to edit-session operations
    #[error("Session error: {0}")]
    Session(String),
}

impl From<crate::config::ConfigError> for KingraphError {
    fn from(err: crate::config::ConfigError) -> Self {
        KingraphError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for KingraphError {
    fn from(err: serde_json::Error) -> Self {
        KingraphError::Parse(err.to_string())
    }
}

/// Result type for Kingraph operations
pub type Result<T> = std::result::Result<T, KingraphError>;
