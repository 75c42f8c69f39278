//! Heuristic classification of free-text relationship labels.
//!
//! Maps a label to a semantic category and display color, honoring modifier
//! prefixes/suffixes (step-, half-, foster-, adoptive, in-law) and the
//! "ended" override (ex-, former, divorced). The override is tested against
//! the original string, not the modifier-stripped one, so `ex-wife` stays
//! gray even though the stripped label would classify as love.

use serde::{Deserialize, Serialize};

use crate::config::Palette;
use crate::label::normalize;

/// Semantic category of a relationship label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCategory {
    Love,
    PotentialLove,
    Family,
    Property,
    Other,
    Unknown,
}

/// Result of classifying a single label
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Resolved display color, alpha-suffixed when a modifier was stripped
    pub color: String,
    pub category: LabelCategory,
    /// True when a modifier token was stripped before category matching
    pub is_modified: bool,
}

/// Modifier tokens stripped (once) from either end of a label before
/// category matching
const MODIFIERS: &[&str] = &["step", "foster", "half", "adoptive", "in-law"];

const LOVE: &[&str] = &[
    "wife",
    "husband",
    "spouse",
    "married",
    "engaged",
    "partner",
    "lover",
    "fiance",
    "fiancee",
    "girlfriend",
    "boyfriend",
];

const POTENTIAL_LOVE: &[&str] = &[
    "crush",
    "love interest",
    "harem candidate",
    "admirer",
];

const FAMILY: &[&str] = &[
    "father",
    "mother",
    "parent",
    "son",
    "daughter",
    "child",
    "brother",
    "sister",
    "sibling",
    "twin",
    "aunt",
    "uncle",
    "niece",
    "nephew",
    "cousin",
    "grandfather",
    "grandmother",
    "grandson",
    "granddaughter",
    "relative",
];

const PROPERTY: &[&str] = &[
    "maid",
    "servant",
    "slave",
    "pet",
    "butler",
    "master",
    "owner",
    "creator",
    "creation",
];

const OTHER: &[&str] = &[
    "friend",
    "best friend",
    "childhood friend",
    "classmate",
    "colleague",
    "teammate",
    "rival",
    "enemy",
    "teacher",
    "student",
    "mentor",
    "neighbor",
    "roommate",
    "acquaintance",
    "senpai",
    "kouhai",
];

/// Classify a free-text label into a category and display color.
///
/// Total over any input: blank or unrecognized labels degrade to
/// [`LabelCategory::Unknown`] and the palette's unknown color.
pub fn classify(label: &str, palette: &Palette) -> Classification {
    let original = normalize(label);
    let (stripped, is_modified) = strip_modifier(&original);

    let category = categorize(&stripped);

    let mut color = if is_ended(&original) {
        // Ended relations are neutral gray no matter what the stripped label
        // would classify as.
        palette.ended.clone()
    } else {
        category_color(category, palette)
    };

    if is_modified {
        color.push_str(&palette.modified_alpha);
    }

    Classification {
        color,
        category,
        is_modified,
    }
}

/// Strip at most one modifier token from either end of a normalized label
fn strip_modifier(label: &str) -> (String, bool) {
    for modifier in MODIFIERS {
        for separator in ["-", " "] {
            let prefix = format!("{modifier}{separator}");
            if let Some(rest) = label.strip_prefix(&prefix) {
                return (rest.trim().to_string(), true);
            }
            let suffix = format!("{separator}{modifier}");
            if let Some(rest) = label.strip_suffix(&suffix) {
                return (rest.trim().to_string(), true);
            }
        }
        // Bare prefix/suffix, e.g. "stepmother"
        if let Some(rest) = label.strip_prefix(modifier) {
            if !rest.is_empty() {
                return (rest.trim().to_string(), true);
            }
        }
        if let Some(rest) = label.strip_suffix(modifier) {
            if !rest.is_empty() {
                return (rest.trim().to_string(), true);
            }
        }
    }
    (label.to_string(), false)
}

/// Category membership, first match wins in priority order
fn categorize(stripped: &str) -> LabelCategory {
    let lists = [
        (LOVE, LabelCategory::Love),
        (POTENTIAL_LOVE, LabelCategory::PotentialLove),
        (FAMILY, LabelCategory::Family),
        (PROPERTY, LabelCategory::Property),
        (OTHER, LabelCategory::Other),
    ];
    for (list, category) in lists {
        if list.contains(&stripped) {
            return category;
        }
    }
    LabelCategory::Unknown
}

/// Whether the original (pre-strip) label signals an ended relation
fn is_ended(original: &str) -> bool {
    original.starts_with("ex-")
        || original.starts_with("ex ")
        || original.starts_with("former ")
        || original.starts_with("former-")
        || original == "divorced"
}

fn category_color(category: LabelCategory, palette: &Palette) -> String {
    match category {
        LabelCategory::Love => palette.love.clone(),
        LabelCategory::PotentialLove => palette.potential_love.clone(),
        LabelCategory::Family => palette.family.clone(),
        LabelCategory::Property => palette.property.clone(),
        LabelCategory::Other => palette.other.clone(),
        LabelCategory::Unknown => palette.unknown.clone(),
    }
}
