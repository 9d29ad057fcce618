//! Document loading tests.

use std::fs;

use semsim_graph::{
    rooted_depth, shortest_path_length, GraphError, GraphStore, PredicateFilter, Taxonomy,
};
use tempfile::tempdir;

use crate::common::fixtures::{animal_taxonomy, ANIMAL_JSON};

#[test]
fn test_load_file_and_query() {
    println!("\n=== TEST: Load taxonomy file ===");
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("animals.json");
    fs::write(&path, ANIMAL_JSON).expect("write fixture");

    let taxonomy = Taxonomy::load_json_file(&path).expect("load");
    println!("  loaded {} nodes, {} edges", taxonomy.node_count(), taxonomy.edge_count());

    assert_eq!(taxonomy.node_count(), 6);
    assert_eq!(taxonomy.edge_count(), 5);
    assert_eq!(rooted_depth(&taxonomy, "penguin", &PredicateFilter::all()), 2);
}

#[test]
fn test_saved_document_reloads_identically() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("roundtrip.json");

    let original = animal_taxonomy();
    fs::write(&path, original.to_json_string().expect("serialize")).expect("write");
    let reloaded = Taxonomy::load_json_file(&path).expect("reload");

    assert_eq!(reloaded.to_document(), original.to_document());
    let filter = PredicateFilter::all();
    assert_eq!(
        shortest_path_length(&reloaded, "dog", "penguin", &filter),
        shortest_path_length(&original, "dog", "penguin", &filter)
    );
}

#[test]
fn test_truncated_file_is_deserialization_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, &ANIMAL_JSON[..40]).expect("write");

    let err = Taxonomy::load_json_file(&path).unwrap_err();
    assert!(matches!(err, GraphError::Deserialization(_)), "got {:?}", err);
}

#[test]
fn test_reader_accepts_edges_only_document() {
    let json = br#"{ "edges": [{ "source": "x", "target": "y", "predicate": "part-of" }] }"#;
    let taxonomy = Taxonomy::from_reader(&json[..]).expect("valid document");

    assert!(taxonomy.has_node("x"));
    assert!(taxonomy.has_node("y"));
    assert_eq!(taxonomy.outgoing_edges("x")[0].predicate, "part-of");
}
