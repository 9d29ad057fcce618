//! Edge-filtered BFS primitives over a taxonomy.
//!
//! - [`bfs_shortest_path`]: undirected shortest path (edges usable both ways)
//! - [`shortest_path_length`]: edge count of that path
//! - [`rooted_depth`]: BFS eccentricity along outgoing edges
//! - [`path_length_to_ancestor`]: directed distance to a named ancestor
//!
//! # Performance
//!
//! Every call is O(V + E) over the reachable part of the graph.
//! Uses VecDeque for O(1) frontier operations.
//! Uses HashSet for O(1) visited lookup.

mod traversal;


pub use traversal::{bfs_shortest_path, path_length_to_ancestor, rooted_depth, shortest_path_length};
