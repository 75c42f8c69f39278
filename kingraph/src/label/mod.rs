//! Free-text relationship label handling
//!
//! Labels are user-authored open strings, never a closed vocabulary. This
//! module provides the heuristic overlays on top of them: semantic
//! classification with display colors, symmetric-pair canonicalization,
//! suppression of redundant inverse labels, and priority ordering for list
//! display.

pub mod canonical;
pub mod classifier;
pub mod opposites;
pub mod sort;

// Re-export key types for convenience
pub use canonical::{Canonicalized, canonicalize};
pub use classifier::{Classification, LabelCategory, classify};
pub use opposites::suppress_opposites;
pub use sort::sort_for_display;

/// Normalize a raw label for matching: lowercased and trimmed. Total over
/// blank and whitespace-only input.
pub(crate) fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
