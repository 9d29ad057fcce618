//! Graph traversal primitives for taxonomy similarity.
//!
//! Every primitive reads the graph through [`GraphStore`](crate::GraphStore)
//! and honors a [`PredicateFilter`](crate::PredicateFilter): an edge is only
//! followed if its label passes the filter.
//!
//! # Algorithms
//!
//! - **BFS**: Undirected shortest paths, rooted depth and ancestor distance
//! - **LCA**: Ancestor closure and lowest common ancestors
//! - **Constrained**: Hirst-St-Onge path search with direction-change penalties
//!
//! # Edge Direction
//!
//! Outgoing edges point to ancestors. "Forward" traversals (depth, ancestor
//! distance, ancestor closure) follow outgoing edges only. Shortest paths
//! and the constrained search also follow incoming edges.
//!
//! # Absent Nodes
//!
//! No primitive fails on an unknown id. Each has a documented neutral result
//! (`None`, `0`, or an empty list).
//!
//! # Examples
//!
//! ```
//! use semsim_graph::traversal::{lowest_common_ancestors, rooted_depth};
//! use semsim_graph::{PredicateFilter, Taxonomy};
//!
//! let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
//!     { "source": "mammal", "target": "animal" },
//!     { "source": "dog", "target": "mammal" },
//!     { "source": "cat", "target": "mammal" }
//! ] }"#).unwrap();
//!
//! let filter = PredicateFilter::all();
//! assert_eq!(rooted_depth(&taxonomy, "dog", &filter), 2);
//! assert_eq!(lowest_common_ancestors(&taxonomy, "dog", "cat", &filter), vec!["mammal", "animal"]);
//! ```

pub mod bfs;
pub mod constrained;
pub mod lca;

mod helpers;

#[cfg(test)]
mod fixtures;

pub use bfs::{bfs_shortest_path, path_length_to_ancestor, rooted_depth, shortest_path_length};
pub use constrained::{
    constrained_path_search, hirst_st_onge_score, ConstrainedSearchResult, Direction,
};
pub use lca::{ancestor_closure, lowest_common_ancestors};
