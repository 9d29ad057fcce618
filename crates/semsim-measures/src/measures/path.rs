//! Measures derived from the undirected shortest path.

use semsim_graph::{shortest_path_length, GraphStore};
use tracing::debug;

use crate::options::MeasureOptions;

/// Rada distance: edges on the shortest undirected path.
///
/// 0 for identical concepts, and also 0 when there is no path. Use
/// [`rada_similarity`] to tell the two apart.
pub fn shortest_path<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    options: &MeasureOptions,
) -> f64 {
    match shortest_path_length(graph, concept1, concept2, &options.predicates) {
        Some(length) => length as f64,
        None => {
            debug!(concept1, concept2, measure = "shortestPath", "no path");
            0.0
        }
    }
}

/// `1 / (1 + length)`, or 0 when there is no path.
pub fn rada_similarity<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    options: &MeasureOptions,
) -> f64 {
    match shortest_path_length(graph, concept1, concept2, &options.predicates) {
        Some(length) => 1.0 / (1.0 + length as f64),
        None => {
            debug!(concept1, concept2, measure = "radaSimilarity", "no path");
            0.0
        }
    }
}

/// Resnik edge-counting similarity: `2 * D - length`.
///
/// `D` is `options.max_depth`. Returns 0 without a configured depth or
/// without a path. Not clamped: a path longer than `2 * D` scores negative.
pub fn resnik_edge<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    options: &MeasureOptions,
) -> f64 {
    let Some(max_depth) = options.max_depth else {
        debug!(concept1, concept2, measure = "resnikEdge", "maxDepth not set");
        return 0.0;
    };

    match shortest_path_length(graph, concept1, concept2, &options.predicates) {
        Some(length) => 2.0 * f64::from(max_depth) - length as f64,
        None => {
            debug!(concept1, concept2, measure = "resnikEdge", "no path");
            0.0
        }
    }
}
