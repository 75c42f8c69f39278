//! Node degree counting and size mapping.
//!
//! A node's visible degree is the number of visible edges touching it; sizes
//! map linearly into the configured range. Characters with no visible edge
//! are not drawn at all (they stay reachable through direct navigation
//! elsewhere).

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::models::{Character, DirectedEdge, GraphNode};

/// Build the renderable node set from the character roster and the edge list.
///
/// Edges naming a character absent from the roster are tolerated; no node is
/// fabricated for them.
pub fn compute_nodes(
    characters: &[Character],
    edges: &[DirectedEdge],
    config: &GraphConfig,
) -> Vec<GraphNode> {
    let mut degrees: HashMap<i64, usize> = HashMap::new();
    for edge in edges.iter().filter(|e| e.visualize) {
        *degrees.entry(edge.source).or_insert(0) += 1;
        *degrees.entry(edge.target).or_insert(0) += 1;
    }

    let max_degree = degrees.values().copied().max().unwrap_or(0);

    characters
        .iter()
        .filter_map(|character| {
            let degree = degrees.get(&character.id).copied().unwrap_or(0);
            if degree == 0 {
                return None;
            }
            Some(GraphNode {
                id: character.id,
                name: character.name.clone(),
                gender: character.gender.clone(),
                image: character.image_url.clone(),
                visible_degree: degree,
                size: size_for(degree, max_degree, config),
            })
        })
        .collect()
}

fn size_for(degree: usize, max_degree: usize, config: &GraphConfig) -> f32 {
    if max_degree == 0 {
        return config.min_node_size;
    }
    let span = config.max_node_size - config.min_node_size;
    let size = config.min_node_size + span * degree as f32 / max_degree as f32;
    size.clamp(config.min_node_size, config.max_node_size)
}
