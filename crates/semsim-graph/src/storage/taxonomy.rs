//! In-memory taxonomy multigraph.

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};

use super::{EdgeRef, GraphStore};

/// Adjacency entry: neighbor node index and interned predicate index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdjacentEdge {
    neighbor: usize,
    predicate: usize,
}

/// Directed multigraph of concepts joined by labeled edges.
///
/// Node ids and predicates are interned once; adjacency lists hold indices.
/// Edges are enumerated in insertion order, which gives every traversal a
/// stable tie-breaking order.
///
/// Parallel edges are kept as-is, including repeats of the same label.
///
/// # Example
///
/// ```
/// use semsim_graph::{GraphStore, Taxonomy};
///
/// let mut taxonomy = Taxonomy::new();
/// taxonomy.add_node("dog");
/// taxonomy.add_node("mammal");
/// taxonomy.add_edge("dog", "mammal", "is-a").unwrap();
///
/// assert!(taxonomy.has_node("dog"));
/// assert_eq!(taxonomy.outgoing_edges("dog")[0].neighbor, "mammal");
/// assert_eq!(taxonomy.incoming_edges("mammal")[0].neighbor, "dog");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    node_index: HashMap<String, usize>,
    nodes: Vec<String>,
    predicate_index: HashMap<String, usize>,
    predicates: Vec<String>,
    outgoing: Vec<Vec<AdjacentEdge>>,
    incoming: Vec<Vec<AdjacentEdge>>,
    /// (source, target, predicate) in insertion order.
    edge_log: Vec<(usize, usize, usize)>,
}

impl Taxonomy {
    /// Create an empty taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty taxonomy with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            node_index: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            outgoing: Vec::with_capacity(nodes),
            incoming: Vec::with_capacity(nodes),
            ..Self::default()
        }
    }

    /// Add a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return false;
        }
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(id);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        true
    }

    /// Add a directed edge `source -> target` labeled `predicate`.
    ///
    /// # Errors
    ///
    /// `GraphError::NodeNotFound` if either endpoint has not been added.
    pub fn add_edge(&mut self, source: &str, target: &str, predicate: &str) -> GraphResult<()> {
        let src = self.index_of(source)?;
        let dst = self.index_of(target)?;
        let pred = self.intern_predicate(predicate);

        self.outgoing[src].push(AdjacentEdge {
            neighbor: dst,
            predicate: pred,
        });
        self.incoming[dst].push(AdjacentEdge {
            neighbor: src,
            predicate: pred,
        });
        self.edge_log.push((src, dst, pred));

        log::trace!("edge added: {} -[{}]-> {}", source, predicate, target);
        Ok(())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_log.len()
    }

    /// Whether the taxonomy has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    /// All edges as `(source, target, predicate)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.edge_log.iter().map(move |&(src, dst, pred)| {
            (
                self.nodes[src].as_str(),
                self.nodes[dst].as_str(),
                self.predicates[pred].as_str(),
            )
        })
    }

    /// Whether an edge `source -> target` with this exact label exists.
    #[must_use]
    pub fn contains_edge(&self, source: &str, target: &str, predicate: &str) -> bool {
        let (Some(&src), Some(&dst), Some(&pred)) = (
            self.node_index.get(source),
            self.node_index.get(target),
            self.predicate_index.get(predicate),
        ) else {
            return false;
        };
        self.outgoing[src]
            .iter()
            .any(|edge| edge.neighbor == dst && edge.predicate == pred)
    }

    fn index_of(&self, id: &str) -> GraphResult<usize> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
    }

    fn intern_predicate(&mut self, predicate: &str) -> usize {
        if let Some(&idx) = self.predicate_index.get(predicate) {
            return idx;
        }
        let idx = self.predicates.len();
        self.predicate_index.insert(predicate.to_string(), idx);
        self.predicates.push(predicate.to_string());
        idx
    }

    fn edge_refs<'a>(&'a self, edges: &'a [AdjacentEdge]) -> Vec<EdgeRef<'a>> {
        edges
            .iter()
            .map(|edge| {
                EdgeRef::new(
                    self.nodes[edge.neighbor].as_str(),
                    self.predicates[edge.predicate].as_str(),
                )
            })
            .collect()
    }
}

impl GraphStore for Taxonomy {
    fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    fn outgoing_edges(&self, id: &str) -> Vec<EdgeRef<'_>> {
        match self.node_index.get(id) {
            Some(&idx) => self.edge_refs(&self.outgoing[idx]),
            None => Vec::new(),
        }
    }

    fn incoming_edges(&self, id: &str) -> Vec<EdgeRef<'_>> {
        match self.node_index.get(id) {
            Some(&idx) => self.edge_refs(&self.incoming[idx]),
            None => Vec::new(),
        }
    }
}

static_assertions::assert_impl_all!(Taxonomy: Send, Sync, Clone);
