//! Shared traversal helpers.
//!
//! Every primitive enumerates neighbors through these functions so that the
//! predicate filter and the outgoing-then-incoming ordering are applied the
//! same way everywhere.

use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::ControlFlow;

use crate::storage::{EdgeRef, GraphStore, PredicateFilter};

use super::constrained::Direction;

/// Outgoing (`Up`) then incoming (`Down`) edges of `node` that pass `filter`.
pub(crate) fn directed_edges<'g, G: GraphStore + ?Sized>(
    graph: &'g G,
    node: &str,
    filter: &PredicateFilter,
) -> Vec<(EdgeRef<'g>, Direction)> {
    let outgoing = graph.outgoing_edges(node);
    let incoming = graph.incoming_edges(node);

    let mut edges = Vec::with_capacity(outgoing.len() + incoming.len());
    edges.extend(
        outgoing
            .into_iter()
            .filter(|edge| filter.allows(edge.predicate))
            .map(|edge| (edge, Direction::Up)),
    );
    edges.extend(
        incoming
            .into_iter()
            .filter(|edge| filter.allows(edge.predicate))
            .map(|edge| (edge, Direction::Down)),
    );
    edges
}

/// Breadth-first walk along outgoing filtered edges.
///
/// Calls `visit(node, depth)` once per reachable node in dequeue order,
/// starting with `start` at depth 0. Stops early when `visit` breaks and
/// returns the break value. The caller is responsible for checking that
/// `start` exists.
pub(crate) fn forward_bfs<'a, G, B, F>(
    graph: &'a G,
    start: &'a str,
    filter: &PredicateFilter,
    mut visit: F,
) -> Option<B>
where
    G: GraphStore + ?Sized,
    F: FnMut(&'a str, usize) -> ControlFlow<B>,
{
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut frontier: VecDeque<(&'a str, usize)> = VecDeque::new();

    visited.insert(start);
    frontier.push_back((start, 0));

    while let Some((current, depth)) = frontier.pop_front() {
        if let ControlFlow::Break(found) = visit(current, depth) {
            return Some(found);
        }

        let outgoing = graph.outgoing_edges(current);
        for edge in outgoing {
            if !filter.allows(edge.predicate) {
                continue;
            }
            if visited.insert(edge.neighbor) {
                log::trace!("forward BFS: {} -> {} (depth {})", current, edge.neighbor, depth + 1);
                frontier.push_back((edge.neighbor, depth + 1));
            }
        }
    }

    None
}

/// Rebuild a path from BFS parent pointers, start node first.
pub(crate) fn reconstruct_path(parent: &HashMap<&str, &str>, target: &str) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;

    while let Some(&prev) = parent.get(current) {
        path.push(prev.to_string());
        current = prev;
    }

    path.reverse();
    path
}
