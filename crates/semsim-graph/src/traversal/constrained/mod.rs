//! Hirst-St-Onge constrained path search.
//!
//! Breadth-first search over path states rather than nodes. A state is a
//! simple path prefix from `concept1` together with the direction of its
//! last edge and the number of direction changes so far:
//!
//! - **Up**: following an outgoing edge (toward more general concepts)
//! - **Down**: following an incoming edge (toward more specific concepts)
//!
//! A path reaching `concept2` with `length` edges and `changes` reversals
//! scores `C - length - k * changes`. Every simple path of at most
//! `max_length` edges is considered; the search does not stop at the first
//! completion.
//!
//! # Memory
//!
//! Path prefixes live in a [`PathArena`](arena) as `(node, parent)` entries.
//! A state is an arena index, so extending a path is O(1) and shared
//! prefixes are stored once. Full paths are only materialized for the best
//! completion.
//!
//! # Cost
//!
//! Exponential in `max_length` on dense graphs. `max_length` is the only
//! bound; there is no node budget or timeout.

mod arena;
mod search;
mod types;


pub use search::{constrained_path_search, hirst_st_onge_score};
pub use types::{ConstrainedSearchResult, Direction};
