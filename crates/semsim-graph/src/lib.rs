//! Taxonomy Graph Store and Traversal Primitives
//!
//! This crate provides the graph layer for taxonomy-based semantic
//! similarity: a read-only graph capability trait, an in-memory labeled
//! multigraph, and the edge-filtered traversals every similarity measure is
//! built from.
//!
//! # Architecture
//!
//! - **config**: Hirst-St-Onge scoring constants and search bound
//! - **error**: Error handling with GraphError
//! - **storage**: `GraphStore` trait, `Taxonomy` multigraph, predicate filters, JSON documents
//! - **traversal**: BFS shortest paths, depth, ancestor distance, LCA and constrained path search
//!
//! # Example
//!
//! ```
//! use semsim_graph::error::GraphResult;
//! use semsim_graph::{shortest_path_length, PredicateFilter, Taxonomy};
//!
//! fn example() -> GraphResult<()> {
//!     let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
//!         { "source": "dog", "target": "mammal" },
//!         { "source": "cat", "target": "mammal" }
//!     ] }"#)?;
//!
//!     let filter = PredicateFilter::from("is-a");
//!     assert_eq!(shortest_path_length(&taxonomy, "dog", "cat", &filter), Some(2));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod storage;
pub mod traversal;

// Re-exports for convenience
pub use config::HirstStOngeConfig;
pub use error::{GraphError, GraphResult};
pub use storage::{
    EdgeRecord, EdgeRef, GraphStore, PredicateFilter, Taxonomy, TaxonomyDocument,
    DEFAULT_PREDICATE,
};
pub use traversal::{
    ancestor_closure, bfs_shortest_path, constrained_path_search, hirst_st_onge_score,
    lowest_common_ancestors, path_length_to_ancestor, rooted_depth, shortest_path_length,
    ConstrainedSearchResult, Direction,
};
