//! Priority ordering of relationship labels for list display.
//!
//! Non-graph views show a character's relationship types as a flat list; this
//! sorts them into a socially meaningful order (parents first, then extended
//! family, siblings, spouses, partners, cousins) with everything unrecognized
//! trailing in its original order.

use crate::label::normalize;

/// Priority buckets, highest first. A label containing "cousin" lands in an
/// implicit wildcard bucket after these.
const BUCKETS: &[&[&str]] = &[
    &["father", "mother", "parent", "dad", "mom"],
    &["aunt", "uncle"],
    &["brother", "sister", "sibling"],
    &["husband", "wife", "spouse", "married"],
    &["partner", "boyfriend", "girlfriend", "lover"],
];

/// Order labels by bucket rank, then alphabetically within a bucket.
/// Unbucketed labels keep their relative order and follow all bucketed ones.
pub fn sort_for_display(labels: &[String]) -> Vec<String> {
    let mut bucketed: Vec<(usize, String)> = Vec::new();
    let mut rest: Vec<String> = Vec::new();

    for label in labels {
        match rank(label) {
            Some(rank) => bucketed.push((rank, label.clone())),
            None => rest.push(label.clone()),
        }
    }

    bucketed.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| normalize(a).cmp(&normalize(b)))
    });

    bucketed
        .into_iter()
        .map(|(_, label)| label)
        .chain(rest)
        .collect()
}

fn rank(label: &str) -> Option<usize> {
    let key = normalize(label);
    for (rank, bucket) in BUCKETS.iter().enumerate() {
        if bucket.contains(&key.as_str()) {
            return Some(rank);
        }
    }
    if key.contains("cousin") {
        return Some(BUCKETS.len());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bucketed_before_unbucketed() {
        let sorted = sort_for_display(&labels(&["father", "unknownlabel", "mother"]));
        assert_eq!(sorted, labels(&["father", "mother", "unknownlabel"]));
    }

    #[test]
    fn test_ladder_order() {
        let sorted = sort_for_display(&labels(&[
            "wife",
            "second cousin",
            "uncle",
            "sibling",
            "mother",
            "girlfriend",
        ]));
        assert_eq!(
            sorted,
            labels(&[
                "mother",
                "uncle",
                "sibling",
                "wife",
                "girlfriend",
                "second cousin",
            ])
        );
    }

    #[test]
    fn test_alphabetical_within_bucket() {
        let sorted = sort_for_display(&labels(&["sister", "Brother"]));
        assert_eq!(sorted, labels(&["Brother", "sister"]));
    }

    #[test]
    fn test_unbucketed_keeps_original_order() {
        let sorted = sort_for_display(&labels(&["zeta", "alpha", "mid"]));
        assert_eq!(sorted, labels(&["zeta", "alpha", "mid"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_for_display(&[]).is_empty());
    }
}
