//! Constrained path search algorithm.

use std::collections::VecDeque;

use crate::config::HirstStOngeConfig;
use crate::storage::{GraphStore, PredicateFilter};
use crate::traversal::helpers::directed_edges;

use super::arena::PathArena;
use super::types::{ConstrainedSearchResult, SearchState};

/// Find the best-scoring simple path between two concepts.
///
/// # Algorithm
///
/// 1. Start from a single state at `concept1` (no direction, zero changes)
/// 2. Dequeue a state; if it sits on `concept2`, score it and do not expand
/// 3. Otherwise, if the path is shorter than `max_length`, enqueue one state
///    per filtered outgoing (Up) and incoming (Down) edge whose neighbor is
///    not already on the path
/// 4. Repeat until the queue is empty and report the best score, floored at 0
///
/// A state whose path would exceed `max_length` is never created, which is
/// equivalent to discarding it on dequeue.
///
/// # Arguments
/// * `graph` - Graph store
/// * `concept1` - Start concept
/// * `concept2` - Goal concept
/// * `config` - Score constants and length cap
/// * `filter` - Edge label filter
///
/// # Returns
///
/// Always a result. When either concept is absent the score is 0 and no
/// path is reported.
///
/// # Example
///
/// ```
/// use semsim_graph::config::HirstStOngeConfig;
/// use semsim_graph::{constrained_path_search, PredicateFilter, Taxonomy};
///
/// let taxonomy = Taxonomy::from_json_str(r#"{ "edges": [
///     { "source": "dog", "target": "mammal" },
///     { "source": "cat", "target": "mammal" }
/// ] }"#).unwrap();
///
/// let result = constrained_path_search(
///     &taxonomy, "dog", "cat", &HirstStOngeConfig::default(), &PredicateFilter::all(),
/// );
/// // dog -UP-> mammal -DOWN-> cat: length 2, one change
/// assert_eq!(result.score, 5.0);
/// assert_eq!(result.direction_changes, 1);
/// ```
pub fn constrained_path_search<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    config: &HirstStOngeConfig,
    filter: &PredicateFilter,
) -> ConstrainedSearchResult {
    if !graph.has_node(concept1) || !graph.has_node(concept2) {
        log::debug!(
            "constrained search skipped: {} or {} absent",
            concept1,
            concept2
        );
        return ConstrainedSearchResult::not_found();
    }

    let mut arena = PathArena::with_capacity(64);
    let mut queue: VecDeque<SearchState> = VecDeque::new();
    queue.push_back(SearchState::root(arena.push_root(concept1)));

    // (raw score, arena entry, changes) of the best completion so far
    let mut best: Option<(f64, usize, usize)> = None;
    let mut states_explored = 0usize;
    let mut completions = 0usize;

    while let Some(state) = queue.pop_front() {
        states_explored += 1;

        let node = arena.node(state.entry);
        let length = arena.length(state.entry);

        if node == concept2 {
            completions += 1;
            let score = config.path_score(length, state.changes);
            log::trace!(
                "completion: length={}, changes={}, score={}",
                length,
                state.changes,
                score
            );
            if best.map_or(true, |(best_score, _, _)| score > best_score) {
                best = Some((score, state.entry, state.changes));
            }
            continue;
        }

        if length >= config.max_length {
            continue;
        }

        for (edge, direction) in directed_edges(graph, node, filter) {
            if arena.contains(state.entry, edge.neighbor) {
                continue;
            }
            let entry = arena.extend(state.entry, edge.neighbor);
            queue.push_back(state.step(entry, direction));
        }
    }

    let result = match best {
        Some((score, entry, changes)) => ConstrainedSearchResult {
            score: score.max(0.0),
            best_path: Some(arena.path(entry)),
            direction_changes: changes,
            states_explored,
            completions,
        },
        None => ConstrainedSearchResult {
            states_explored,
            ..ConstrainedSearchResult::not_found()
        },
    };

    log::debug!(
        "constrained search {} -> {}: score={}, {} states, {} completions, {} prefixes",
        concept1,
        concept2,
        result.score,
        states_explored,
        completions,
        arena.len()
    );
    result
}

/// Hirst-St-Onge score of two concepts: the `score` of
/// [`constrained_path_search`].
pub fn hirst_st_onge_score<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    config: &HirstStOngeConfig,
    filter: &PredicateFilter,
) -> f64 {
    constrained_path_search(graph, concept1, concept2, config, filter).score
}
