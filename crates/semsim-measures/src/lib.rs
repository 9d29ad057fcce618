//! Path-Based Semantic Similarity Measures
//!
//! Six measures over an is-a taxonomy, built on the traversal primitives of
//! [`semsim_graph`]:
//!
//! | Measure | Formula |
//! |---------|---------|
//! | `shortestPath` | edges on the shortest undirected path |
//! | `radaSimilarity` | `1 / (1 + len)` |
//! | `resnikEdge` | `2D - len` |
//! | `wuPalmer` | `2 d(lca) / (2 d(lca) + len(c1, lca) + len(c2, lca))` |
//! | `leacockChodorow` | `ln(2D) - ln(N)` |
//! | `hirstStOnge` | `C - len - k * changes` |
//!
//! All measures share [`MeasureOptions`] and return 0 for absent concepts.
//!
//! # Example
//!
//! ```
//! use semsim_graph::Taxonomy;
//! use semsim_measures::{wu_palmer, MeasureOptions};
//!
//! let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
//!     { "source": "mammal", "target": "animal" },
//!     { "source": "dog", "target": "mammal" },
//!     { "source": "cat", "target": "mammal" }
//! ] }"#).unwrap();
//!
//! let options = MeasureOptions::default().predicates("is-a");
//! assert_eq!(wu_palmer(&taxonomy, "dog", "cat", &options), 0.5);
//! ```

pub mod measure;
pub mod measures;
pub mod options;

pub use measure::{Measure, MeasureFn};
pub use measures::{
    hirst_st_onge, leacock_chodorow, rada_similarity, resnik_edge, shortest_path, wu_palmer,
};
pub use options::MeasureOptions;
