//! Symmetric-pair canonicalization.
//!
//! Known mutual label pairs ("brother"/"sister", "husband"/"wife", ...) are
//! merged into one shared canonical label applied to both directions. A merge
//! signals the expander to emit a single edge for the mutual relation instead
//! of two.

use crate::label::normalize;

/// Result of canonicalizing a record's forward/reverse label pair
#[derive(Debug, Clone, PartialEq)]
pub struct Canonicalized {
    pub forward: Option<String>,
    pub reverse: Option<String>,
    /// True when both labels were replaced by one canonical label
    pub merged: bool,
}

/// Symmetric pairs `(a, b)` and the canonical label both sides collapse to.
/// Matching is order-independent, so each pair is listed once.
const SYMMETRIC_PAIRS: &[(&str, &str, &str)] = &[
    ("brother", "sister", "sibling"),
    ("brother", "brother", "sibling"),
    ("sister", "sister", "sibling"),
    ("step-brother", "step-sister", "step-sibling"),
    ("stepbrother", "stepsister", "step-sibling"),
    ("half-brother", "half-sister", "half-sibling"),
    ("halfbrother", "halfsister", "half-sibling"),
    ("adoptive-brother", "adoptive-sister", "adoptive-sibling"),
    ("brother-in-law", "sister-in-law", "sibling-in-law"),
    ("husband", "wife", "married"),
    ("wife", "wife", "married"),
    ("husband", "husband", "married"),
    ("boyfriend", "girlfriend", "partner"),
    ("girlfriend", "girlfriend", "partner"),
    ("boyfriend", "boyfriend", "partner"),
    ("fiance", "fiancee", "engaged"),
    ("fiancee", "fiancee", "engaged"),
    ("fiance", "fiance", "engaged"),
    ("ex-husband", "ex-wife", "divorced"),
    ("ex-wife", "ex-wife", "divorced"),
    ("ex-husband", "ex-husband", "divorced"),
    ("ex-boyfriend", "ex-girlfriend", "ex-partner"),
    ("ex-girlfriend", "ex-girlfriend", "ex-partner"),
    ("ex-boyfriend", "ex-boyfriend", "ex-partner"),
];

/// Merge a forward/reverse label pair into its canonical label when the pair
/// is a known symmetric one. Unknown pairs pass through untouched.
pub fn canonicalize(forward: Option<&str>, reverse: Option<&str>) -> Canonicalized {
    let (Some(forward), Some(reverse)) = (forward, reverse) else {
        return Canonicalized {
            forward: forward.map(str::to_string),
            reverse: reverse.map(str::to_string),
            merged: false,
        };
    };

    // Spaces unify to hyphens so "step brother" matches "step-brother".
    let forward_key = normalize(forward).replace(' ', "-");
    let reverse_key = normalize(reverse).replace(' ', "-");

    for (a, b, canonical) in SYMMETRIC_PAIRS {
        if (forward_key == *a && reverse_key == *b) || (forward_key == *b && reverse_key == *a) {
            return Canonicalized {
                forward: Some((*canonical).to_string()),
                reverse: Some((*canonical).to_string()),
                merged: true,
            };
        }
    }

    Canonicalized {
        forward: Some(forward.to_string()),
        reverse: Some(reverse.to_string()),
        merged: false,
    }
}
