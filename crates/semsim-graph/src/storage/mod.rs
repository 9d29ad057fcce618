//! Graph storage for taxonomy traversal.
//!
//! Traversal code only ever talks to the [`GraphStore`] capability trait:
//! node existence plus outgoing/incoming edge enumeration. Any adjacency
//! representation can implement it; [`Taxonomy`] is the bundled in-memory
//! multigraph.
//!
//! # Module Structure
//!
//! - [`filter`]: Predicate allow-list applied to every traversal
//! - [`taxonomy`]: In-memory directed multigraph implementing `GraphStore`
//! - [`document`]: Serde document form used to build a `Taxonomy` from JSON
//!
//! # Edge Direction
//!
//! Edges point from the more specific concept to the more general one
//! (`dog -> mammal`). Outgoing edges therefore lead to ancestors.

mod document;
mod filter;
mod taxonomy;


pub use self::document::{EdgeRecord, TaxonomyDocument, DEFAULT_PREDICATE};
pub use self::filter::PredicateFilter;
pub use self::taxonomy::Taxonomy;

/// One edge as seen from the node it was enumerated from.
///
/// For outgoing edges `neighbor` is the edge target; for incoming edges it
/// is the edge source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef<'a> {
    /// The node at the other end of the edge.
    pub neighbor: &'a str,
    /// The edge label.
    pub predicate: &'a str,
}

impl<'a> EdgeRef<'a> {
    /// Create an edge reference.
    #[inline]
    pub fn new(neighbor: &'a str, predicate: &'a str) -> Self {
        Self { neighbor, predicate }
    }
}

/// Read-only graph capability consumed by every traversal primitive.
///
/// # Contract
///
/// - Absent nodes have no edges: both enumeration methods return an empty
///   vector for an id where `has_node` is false.
/// - Enumeration order must be stable across repeated calls on an unchanged
///   graph. BFS tie-breaking and "first best path" selection depend on it.
/// - Cost is expected to be O(degree) per call.
pub trait GraphStore {
    /// Whether `id` names a node in the graph.
    fn has_node(&self, id: &str) -> bool;

    /// Edges leaving `id` (toward more general concepts).
    fn outgoing_edges(&self, id: &str) -> Vec<EdgeRef<'_>>;

    /// Edges arriving at `id` (from more specific concepts).
    fn incoming_edges(&self, id: &str) -> Vec<EdgeRef<'_>>;
}

impl<G: GraphStore + ?Sized> GraphStore for &G {
    fn has_node(&self, id: &str) -> bool {
        (**self).has_node(id)
    }

    fn outgoing_edges(&self, id: &str) -> Vec<EdgeRef<'_>> {
        (**self).outgoing_edges(id)
    }

    fn incoming_edges(&self, id: &str) -> Vec<EdgeRef<'_>> {
        (**self).incoming_edges(id)
    }
}
