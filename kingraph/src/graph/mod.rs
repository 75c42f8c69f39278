//! Graph construction: record expansion, deduplication, curvature layout,
//! and node sizing
//!
//! Each pass is a pure function over materialized data; the whole graph is
//! recomputed per invocation rather than diffed incrementally.

pub mod curvature;
pub mod expand;
pub mod nodes;
pub mod pipeline;
pub mod summary;

// Re-export key types for convenience
pub use curvature::allocate_curvature;
pub use expand::expand;
pub use nodes::compute_nodes;
pub use pipeline::{GraphNormalizer, RelationshipGraph};
pub use summary::{RelationshipSummary, SummaryEntry, summarize_for};
