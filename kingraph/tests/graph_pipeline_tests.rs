//! End-to-end tests of the normalization pipeline against API-shaped
//! payloads.

use kingraph::prelude::*;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn full_pipeline_from_api_payload() {
    init_tracing();

    // visualize arrives as 1/0 from some records and true/false from others;
    // the model boundary normalizes both.
    let payload = json!([
        {
            "id": 1,
            "name": "Akira",
            "gender": "m",
            "image_url": "https://img.example/akira.png",
            "relationships": [
                {"id": 10, "from_id": 1, "to_id": 2, "relationship_type": "brother",
                 "reciprocal_relationship_type": "sister", "visualize": 1},
                {"id": 11, "from_id": 1, "to_id": 3, "relationship_type": "teacher",
                 "reciprocal_relationship_type": "student", "visualize": true},
                {"id": 12, "from_id": 1, "to_id": 4, "relationship_type": "acquaintance",
                 "reciprocal_relationship_type": "acquaintance", "visualize": 0}
            ]
        },
        {"id": 2, "name": "Yui", "gender": "f", "relationships": []},
        {"id": 3, "name": "Rin", "relationships": []},
        {"id": 4, "name": "Sora", "relationships": []}
    ])
    .to_string();

    let roster = Character::parse_roster(&payload).expect("payload should parse");
    let graph = GraphNormalizer::default().normalize_roster(&roster);

    // brother/sister merges to one sibling edge; teacher/student expands to
    // two; the invisible acquaintance pair still emits edges.
    let sibling: Vec<_> = graph.edges.iter().filter(|e| e.label == "sibling").collect();
    assert_eq!(sibling.len(), 1);
    assert!(sibling[0].same_labels);
    assert!(!sibling[0].dashed);

    assert_eq!(graph.edges.iter().filter(|e| e.visualize).count(), 3);

    // Degree conservation over visible edges.
    let degree_sum: usize = graph.nodes.iter().map(|n| n.visible_degree).sum();
    assert_eq!(degree_sum, 2 * graph.visible_edges().count());

    // Sora only has an invisible relation, so no node is drawn for it.
    assert!(graph.nodes.iter().all(|n| n.id != 4));
    assert_eq!(graph.nodes.len(), 3);
}

#[test]
fn parallel_edges_get_increasing_curvature() {
    init_tracing();

    let characters = vec![Character::new(1, "Akira"), Character::new(2, "Yui")];
    let records = vec![
        RelationshipRecord::new(1, 2, Some("friend"), Some("friend")),
        RelationshipRecord::new(1, 2, Some("rival"), Some("rival")),
        RelationshipRecord::new(1, 2, Some("classmate"), Some("classmate")),
    ];

    let graph = GraphNormalizer::default().normalize(&characters, &records);

    let forward: Vec<f32> = graph
        .edges
        .iter()
        .filter(|e| e.source == 1 && e.target == 2)
        .map(|e| e.curvature)
        .collect();
    assert_eq!(forward, vec![0.1, 0.2, 0.3]);

    // The reverse stack accumulates its own curvatures independently.
    let reverse: Vec<f32> = graph
        .edges
        .iter()
        .filter(|e| e.source == 2 && e.target == 1)
        .map(|e| e.curvature)
        .collect();
    assert_eq!(reverse, vec![0.1, 0.2, 0.3]);
}

#[test]
fn duplicate_records_produce_one_edge_set() {
    init_tracing();

    let characters = vec![Character::new(1, "Akira"), Character::new(2, "Yui")];
    let records = vec![
        RelationshipRecord::new(1, 2, Some("brother"), Some("sister")),
        // Same unordered pair, swapped orientation and label assignment.
        RelationshipRecord::new(2, 1, Some("sister"), Some("brother")),
    ];

    let graph = GraphNormalizer::default().normalize(&characters, &records);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].label, "sibling");
}

#[test]
fn ended_labels_render_gray_and_dashed() {
    init_tracing();

    let config = GraphConfig::default();
    let ended = config.palette.ended.clone();

    let characters = vec![Character::new(1, "Akira"), Character::new(2, "Yui")];
    let records = vec![RelationshipRecord::new(1, 2, Some("ex-wife"), None)];

    let normalizer = GraphNormalizer::new(config).expect("default config is valid");
    let graph = normalizer.normalize(&characters, &records);

    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].color, ended);
    assert!(graph.edges[0].dashed);
}

#[test]
fn edit_session_round_trips_into_normalization() {
    init_tracing();

    let characters = vec![Character::new(1, "Akira"), Character::new(2, "Yui")];
    let mut session = EditSession::new(Vec::new());
    let temp_id = session.add_blank(2, 1);
    session
        .update(temp_id, Some("boyfriend"), Some("girlfriend"), true)
        .expect("draft exists");

    let records = session.into_records();
    let graph = GraphNormalizer::default().normalize(&characters, &records);

    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].label, "partner");
    assert!(graph.edges[0].same_labels);
}

#[test]
fn profile_summary_matches_record_orientation() {
    init_tracing();

    let config = GraphConfig::default();
    let records = vec![
        RelationshipRecord::new(1, 2, Some("mother"), Some("daughter")),
        RelationshipRecord::new(2, 3, Some("friend"), Some("friend")),
    ];

    let summaries = summarize_for(2, &records, &config);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].partner_id, 1);
    assert_eq!(summaries[0].entries[0].label.as_deref(), Some("mother"));
    assert_eq!(summaries[1].partner_id, 3);
    assert_eq!(summaries[1].entries[0].label.as_deref(), Some("friend"));
}
