//! BFS traversal algorithms.

use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::ControlFlow;

use crate::storage::{GraphStore, PredicateFilter};
use crate::traversal::helpers::{directed_edges, forward_bfs, reconstruct_path};

/// Find the shortest path between two nodes, ignoring edge direction.
///
/// Each node's neighbors are its filtered outgoing edges followed by its
/// filtered incoming edges, in store order. The search stops the first time
/// `target` is dequeued, so among equally short paths the one discovered
/// first wins.
///
/// # Arguments
/// * `graph` - Graph store
/// * `source` - Starting node
/// * `target` - Target node
/// * `filter` - Edge label filter
///
/// # Returns
/// * `Some(path)` - Nodes from `source` to `target` inclusive; `[source]` when they are equal
/// * `None` - Either node is absent, or they are disconnected under `filter`
///
/// # Example
///
/// ```
/// use semsim_graph::{bfs_shortest_path, PredicateFilter, Taxonomy};
///
/// let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
///     { "source": "dog", "target": "mammal" },
///     { "source": "cat", "target": "mammal" }
/// ] }"#).unwrap();
///
/// let path = bfs_shortest_path(&taxonomy, "dog", "cat", &PredicateFilter::all());
/// assert_eq!(path, Some(vec!["dog".to_string(), "mammal".to_string(), "cat".to_string()]));
/// ```
pub fn bfs_shortest_path<G: GraphStore + ?Sized>(
    graph: &G,
    source: &str,
    target: &str,
    filter: &PredicateFilter,
) -> Option<Vec<String>> {
    if !graph.has_node(source) || !graph.has_node(target) {
        log::debug!(
            "shortest path skipped: source_present={}, target_present={}",
            graph.has_node(source),
            graph.has_node(target)
        );
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier: VecDeque<&str> = VecDeque::new();
    let mut parent: HashMap<&str, &str> = HashMap::new();

    visited.insert(source);
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        if current == target {
            let path = reconstruct_path(&parent, target);
            log::debug!(
                "shortest path {} -> {}: {} edges, {} nodes visited",
                source,
                target,
                path.len() - 1,
                visited.len()
            );
            return Some(path);
        }

        for (edge, _) in directed_edges(graph, current, filter) {
            if visited.insert(edge.neighbor) {
                parent.insert(edge.neighbor, current);
                frontier.push_back(edge.neighbor);
            }
        }
    }

    log::debug!(
        "no path {} -> {} ({} nodes visited)",
        source,
        target,
        visited.len()
    );
    None
}

/// Number of edges on the shortest undirected path, or `None` if there is none.
pub fn shortest_path_length<G: GraphStore + ?Sized>(
    graph: &G,
    source: &str,
    target: &str,
    filter: &PredicateFilter,
) -> Option<usize> {
    bfs_shortest_path(graph, source, target, filter).map(|path| path.len() - 1)
}

/// Depth of a node: the greatest BFS distance reachable along outgoing edges.
///
/// Walks outgoing filtered edges only and returns the largest dequeue depth.
/// A node with no outgoing edges, or an absent node, has depth 0.
///
/// With edges drawn child -> parent, this is the distance from the node to
/// the farthest ancestor, so a top-level concept has depth 0.
pub fn rooted_depth<G: GraphStore + ?Sized>(
    graph: &G,
    node: &str,
    filter: &PredicateFilter,
) -> usize {
    if !graph.has_node(node) {
        return 0;
    }

    let mut max_depth = 0;
    forward_bfs(graph, node, filter, |_, depth| {
        max_depth = max_depth.max(depth);
        ControlFlow::<()>::Continue(())
    });

    log::trace!("depth of {} = {}", node, max_depth);
    max_depth
}

/// Directed distance from `node` up to `ancestor` along outgoing edges.
///
/// # Returns
/// * `Some(0)` - `node == ancestor`
/// * `Some(d)` - BFS distance when `ancestor` is reachable
/// * `None` - Unreachable under `filter`, or either node is absent
pub fn path_length_to_ancestor<G: GraphStore + ?Sized>(
    graph: &G,
    node: &str,
    ancestor: &str,
    filter: &PredicateFilter,
) -> Option<usize> {
    if !graph.has_node(node) || !graph.has_node(ancestor) {
        return None;
    }

    forward_bfs(graph, node, filter, |current, depth| {
        if current == ancestor {
            ControlFlow::Break(depth)
        } else {
            ControlFlow::Continue(())
        }
    })
}
