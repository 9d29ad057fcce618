//! Shared fixtures for measure integration tests.

#![allow(dead_code)]

use semsim_graph::Taxonomy;

/// Taxonomy depth used for the reference values.
pub const MAX_DEPTH: u32 = 3;

/// Tolerance for floating point comparisons.
pub const EPS: f64 = 1e-9;

/// Animal taxonomy with child -> parent `is-a` edges.
///
/// ```text
///       animal
///       /    \
///    mammal  bird
///     /   \    \
///   dog   cat  penguin
/// ```
pub const ANIMAL_JSON: &str = r#"{
    "nodes": ["animal", "mammal", "bird", "dog", "cat", "penguin"],
    "edges": [
        { "source": "mammal", "target": "animal" },
        { "source": "bird", "target": "animal" },
        { "source": "dog", "target": "mammal" },
        { "source": "cat", "target": "mammal" },
        { "source": "penguin", "target": "bird" }
    ]
}"#;

pub fn animal_taxonomy() -> Taxonomy {
    Taxonomy::from_json_str(ANIMAL_JSON).expect("fixture document is valid")
}

/// Expected values for one concept pair.
#[derive(Debug, Clone, Copy)]
pub struct Expected {
    pub c1: &'static str,
    pub c2: &'static str,
    pub shortest_path: f64,
    pub rada_similarity: f64,
    pub resnik_edge: f64,
    pub wu_palmer: f64,
    pub leacock_chodorow: f64,
}

/// Reference values with `maxDepth = 3`.
pub fn reference_cases() -> Vec<Expected> {
    let ln6 = 6.0_f64.ln();
    vec![
        Expected {
            c1: "dog",
            c2: "dog",
            shortest_path: 0.0,
            rada_similarity: 1.0,
            resnik_edge: 6.0,
            wu_palmer: 1.0,
            leacock_chodorow: ln6,
        },
        Expected {
            c1: "mammal",
            c2: "dog",
            shortest_path: 1.0,
            rada_similarity: 0.5,
            resnik_edge: 5.0,
            wu_palmer: 2.0 / 3.0,
            leacock_chodorow: ln6 - 2.0_f64.ln(),
        },
        Expected {
            c1: "animal",
            c2: "dog",
            shortest_path: 2.0,
            rada_similarity: 1.0 / 3.0,
            resnik_edge: 4.0,
            wu_palmer: 0.0,
            leacock_chodorow: ln6 - 3.0_f64.ln(),
        },
        Expected {
            c1: "dog",
            c2: "cat",
            shortest_path: 2.0,
            rada_similarity: 1.0 / 3.0,
            resnik_edge: 4.0,
            wu_palmer: 0.5,
            leacock_chodorow: ln6 - 3.0_f64.ln(),
        },
        Expected {
            c1: "dog",
            c2: "penguin",
            shortest_path: 4.0,
            rada_similarity: 0.2,
            resnik_edge: 2.0,
            wu_palmer: 0.0,
            leacock_chodorow: ln6 - 5.0_f64.ln(),
        },
    ]
}

pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}
