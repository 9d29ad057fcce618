//! Ancestor closures and common-ancestor candidates.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::storage::{GraphStore, PredicateFilter};
use crate::traversal::helpers::forward_bfs;

/// Every node reachable from `node` along outgoing filtered edges.
///
/// Returned in BFS order, starting with `node` itself at distance 0.
/// Empty when `node` is absent.
pub fn ancestor_closure<G: GraphStore + ?Sized>(
    graph: &G,
    node: &str,
    filter: &PredicateFilter,
) -> Vec<String> {
    if !graph.has_node(node) {
        return Vec::new();
    }

    let mut closure = Vec::new();
    forward_bfs(graph, node, filter, |current, _| {
        closure.push(current.to_string());
        ControlFlow::<()>::Continue(())
    });
    closure
}

/// Common ancestors of `a` and `b`.
///
/// A node is reported when it lies in the forward closure of both. The
/// closures include the nodes themselves, so `a` is in the result for
/// `lowest_common_ancestors(a, a)` and for any `b` below `a`.
///
/// # Returns
///
/// Candidates in the order the BFS from `b` reaches them, each once. Empty
/// when either node is absent or there is no shared ancestor.
///
/// # Example
///
/// ```
/// use semsim_graph::{lowest_common_ancestors, PredicateFilter, Taxonomy};
///
/// let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
///     { "source": "mammal", "target": "animal" },
///     { "source": "dog", "target": "mammal" },
///     { "source": "cat", "target": "mammal" }
/// ] }"#).unwrap();
///
/// let lcas = lowest_common_ancestors(&taxonomy, "dog", "cat", &PredicateFilter::all());
/// assert_eq!(lcas, vec!["mammal".to_string(), "animal".to_string()]);
/// ```
pub fn lowest_common_ancestors<G: GraphStore + ?Sized>(
    graph: &G,
    a: &str,
    b: &str,
    filter: &PredicateFilter,
) -> Vec<String> {
    if !graph.has_node(a) || !graph.has_node(b) {
        log::debug!("LCA skipped: {} or {} absent", a, b);
        return Vec::new();
    }

    let mut ancestors_a: HashSet<&str> = HashSet::new();
    forward_bfs(graph, a, filter, |current, _| {
        ancestors_a.insert(current);
        ControlFlow::<()>::Continue(())
    });

    let mut candidates = Vec::new();
    let mut visited_b = 0usize;
    forward_bfs(graph, b, filter, |current, _| {
        visited_b += 1;
        if ancestors_a.contains(current) {
            candidates.push(current.to_string());
        }
        ControlFlow::<()>::Continue(())
    });

    log::debug!(
        "LCA {} / {}: {} candidates ({} + {} ancestors scanned)",
        a,
        b,
        candidates.len(),
        ancestors_a.len(),
        visited_b
    );
    candidates
}
