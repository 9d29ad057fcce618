//! Deterministic taxonomy fixtures.
//!
//! Same seed, same taxonomy: generated graphs use an LCG, never a random
//! source, so failures reproduce.

use semsim_graph::{Taxonomy, TaxonomyDocument};

/// Animal taxonomy as a JSON document (child -> parent edges).
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
        { "source": "mammal", "target": "animal", "predicate": "is-a" },
        { "source": "bird", "target": "animal", "predicate": "is-a" },
        { "source": "dog", "target": "mammal", "predicate": "is-a" },
        { "source": "cat", "target": "mammal", "predicate": "is-a" },
        { "source": "penguin", "target": "bird", "predicate": "is-a" }
    ]
}"#;

/// Parse [`ANIMAL_JSON`].
pub fn animal_taxonomy() -> Taxonomy {
    Taxonomy::from_json_str(ANIMAL_JSON).expect("fixture document is valid")
}

/// Simple LCG for deterministic "randomness".
#[inline]
pub fn deterministic_hash(seed: u32) -> u32 {
    seed.wrapping_mul(1103515245).wrapping_add(12345)
}

/// Node id for generated concept `i`.
pub fn concept(i: usize) -> String {
    format!("n{}", i)
}

/// Generate a DAG taxonomy of `node_count` concepts.
///
/// # Invariants
///
/// - `n0` is the only root; every other node reaches it along `is-a` edges
/// - Every edge points from a higher to a lower index (acyclic)
/// - Roughly one node in three also carries a `part-of` edge to another
///   lower-indexed node
pub fn generate_taxonomy(node_count: usize, seed: u32) -> Taxonomy {
    let mut doc = TaxonomyDocument {
        nodes: (0..node_count).map(concept).collect(),
        edges: Vec::new(),
    };

    let mut hash = seed;
    for i in 1..node_count {
        hash = deterministic_hash(hash);
        let parent = (hash >> 8) as usize % i;
        doc.edges.push(semsim_graph::EdgeRecord::new(concept(i), concept(parent), "is-a"));

        hash = deterministic_hash(hash);
        if (hash >> 8) % 3 == 0 {
            let other = (hash >> 12) as usize % i;
            doc.edges.push(semsim_graph::EdgeRecord::new(concept(i), concept(other), "part-of"));
        }
    }

    Taxonomy::from_document(doc).expect("generated document is valid")
}

/// Deterministic pairs of generated concept ids.
pub fn concept_pairs(node_count: usize, count: usize, seed: u32) -> Vec<(String, String)> {
    let mut hash = seed;
    (0..count)
        .map(|_| {
            hash = deterministic_hash(hash);
            let a = (hash >> 8) as usize % node_count;
            hash = deterministic_hash(hash);
            let b = (hash >> 8) as usize % node_count;
            (concept(a), concept(b))
        })
        .collect()
}
