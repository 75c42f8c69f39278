//! Suppression of redundant inverse labels.
//!
//! Property/creator-style relations are inherently one-directional in
//! display: when one side reads "maid", the inverse ("is served by") adds no
//! information and clutters the graph. The same holds for parent-style
//! family labels, where the child-side label is implied.

use crate::label::normalize;

/// Marker substrings signaling an inherently asymmetric relation. "father"
/// and "mother" act as wildcards, matching "grandfather", "stepmother", etc.
const ASYMMETRIC_MARKERS: &[&str] = &[
    "maid",
    "servant",
    "slave",
    "pet",
    "butler",
    "father",
    "mother",
    "creator",
];

/// Blank the inverse of any label containing an asymmetric marker.
///
/// Both checks run against the original inputs, so a pair where each side
/// matches a different marker comes back fully blanked.
pub fn suppress_opposites(
    forward: Option<&str>,
    reverse: Option<&str>,
) -> (Option<String>, Option<String>) {
    let forward_matches = forward.is_some_and(contains_marker);
    let reverse_matches = reverse.is_some_and(contains_marker);

    let kept_forward = if reverse_matches {
        None
    } else {
        forward.map(str::to_string)
    };
    let kept_reverse = if forward_matches {
        None
    } else {
        reverse.map(str::to_string)
    };

    (kept_forward, kept_reverse)
}

fn contains_marker(label: &str) -> bool {
    let normalized = normalize(label);
    ASYMMETRIC_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
}
