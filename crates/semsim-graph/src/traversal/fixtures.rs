//! Test taxonomies shared by the traversal unit tests.

use crate::storage::Taxonomy;

/// Build a taxonomy from `(child, parent)` pairs, all labeled `is-a`.
pub(crate) fn taxonomy_from_edges(edges: &[(&str, &str)]) -> Taxonomy {
    let mut t = Taxonomy::new();
    for &(child, parent) in edges {
        t.add_node(child);
        t.add_node(parent);
        t.add_edge(child, parent, "is-a").expect("add_edge failed");
    }
    t
}

/// Animal taxonomy, edges child -> parent:
///
/// ```text
///       animal
///       /    \
///    mammal  bird
///     /   \    \
///   dog   cat  penguin
/// ```
pub(crate) fn animal_taxonomy() -> Taxonomy {
    let mut t = Taxonomy::new();
    for node in ["animal", "mammal", "bird", "dog", "cat", "penguin"] {
        t.add_node(node);
    }
    for (child, parent) in [
        ("mammal", "animal"),
        ("bird", "animal"),
        ("dog", "mammal"),
        ("cat", "mammal"),
        ("penguin", "bird"),
    ] {
        t.add_edge(child, parent, "is-a").expect("add_edge failed");
    }
    t
}

/// `path` as owned strings, for comparing against traversal output.
pub(crate) fn owned(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}
