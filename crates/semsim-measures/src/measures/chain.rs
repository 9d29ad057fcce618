//! Hirst-St-Onge lexical-chain measure.

use semsim_graph::{hirst_st_onge_score, GraphStore};
use tracing::debug;

use crate::options::MeasureOptions;

/// Hirst-St-Onge similarity: the best `C - length - k * changes` over simple
/// paths of at most `maxLength` edges, floored at 0.
///
/// Uses `options.hirst_st_onge` for the constants and `options.predicates`
/// as the edge filter.
pub fn hirst_st_onge<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    options: &MeasureOptions,
) -> f64 {
    let score = hirst_st_onge_score(
        graph,
        concept1,
        concept2,
        &options.hirst_st_onge,
        &options.predicates,
    );
    if score == 0.0 {
        debug!(
            concept1,
            concept2,
            measure = "hirstStOnge",
            max_length = options.hirst_st_onge.max_length,
            "no scoring chain"
        );
    }
    score
}
