//! Curvature layout for parallel edges.
//!
//! Edges sharing the same ordered (source, target) pair receive increasing
//! curvature so they fan out instead of overlapping. A forward stack and its
//! reverse stack are separate groups on purpose: they curve to opposite
//! sides.

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::models::DirectedEdge;

/// Assign curvature per ordered-pair group in encounter order.
///
/// Invisible edges are not rendered, so they keep curvature 0 and do not
/// advance a group's counter; the numbering of visible edges is unaffected
/// by them.
pub fn allocate_curvature(edges: &mut [DirectedEdge], config: &GraphConfig) {
    let mut counters: HashMap<(i64, i64), u32> = HashMap::new();

    for edge in edges.iter_mut() {
        if !edge.visualize {
            edge.curvature = 0.0;
            continue;
        }
        let count = counters.entry((edge.source, edge.target)).or_insert(0);
        *count += 1;
        edge.curvature = config.curvature_step * *count as f32;
    }
}
