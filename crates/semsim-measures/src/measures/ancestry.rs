//! Measures over the lowest common ancestors of two concepts.

use semsim_graph::{lowest_common_ancestors, path_length_to_ancestor, rooted_depth, GraphStore};
use tracing::{debug, trace};

use crate::options::MeasureOptions;

/// Wu-Palmer similarity.
///
/// For each common ancestor `lca` with `depth(lca) > 0` that both concepts
/// reach along forward edges:
///
/// ```text
/// score = 2 * depth(lca) / (2 * depth(lca) + len(c1 -> lca) + len(c2 -> lca))
/// ```
///
/// Returns the maximum, or 0 when no ancestor qualifies. Ancestors at depth
/// 0 (roots) never qualify, so two concepts sharing only the root score 0.
pub fn wu_palmer<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    options: &MeasureOptions,
) -> f64 {
    let filter = &options.predicates;
    let lcas = lowest_common_ancestors(graph, concept1, concept2, filter);
    if lcas.is_empty() {
        debug!(concept1, concept2, measure = "wuPalmer", "no common ancestor");
        return 0.0;
    }

    let mut best = 0.0_f64;
    for lca in &lcas {
        let depth = rooted_depth(graph, lca, filter);
        let p1 = path_length_to_ancestor(graph, concept1, lca, filter);
        let p2 = path_length_to_ancestor(graph, concept2, lca, filter);

        let (Some(p1), Some(p2)) = (p1, p2) else {
            continue;
        };
        if depth == 0 {
            continue;
        }

        let depth = depth as f64;
        let score = 2.0 * depth / (2.0 * depth + p1 as f64 + p2 as f64);
        trace!(lca = %lca, depth, p1, p2, score, "wu-palmer candidate");
        best = best.max(score);
    }
    best
}

/// Leacock-Chodorow similarity: `ln(2 * D) - ln(N)`.
///
/// `D` is `options.max_depth` and must be positive. `N` is one more than the
/// smallest `len(c1 -> lca) + len(c2 -> lca)` over common ancestors both
/// concepts reach. Identical concepts give `N = 1` and score `ln(2 * D)`.
///
/// Returns 0 when `D` is unset or 0, or when no common ancestor is reachable.
pub fn leacock_chodorow<G: GraphStore + ?Sized>(
    graph: &G,
    concept1: &str,
    concept2: &str,
    options: &MeasureOptions,
) -> f64 {
    let max_depth = match options.max_depth {
        Some(d) if d > 0 => d,
        _ => {
            debug!(
                concept1,
                concept2,
                measure = "leacockChodorow",
                max_depth = ?options.max_depth,
                "maxDepth must be positive"
            );
            return 0.0;
        }
    };

    let filter = &options.predicates;
    let shortest = lowest_common_ancestors(graph, concept1, concept2, filter)
        .iter()
        .filter_map(|lca| {
            let p1 = path_length_to_ancestor(graph, concept1, lca, filter)?;
            let p2 = path_length_to_ancestor(graph, concept2, lca, filter)?;
            Some(p1 + p2)
        })
        .min();

    let Some(shortest) = shortest else {
        debug!(concept1, concept2, measure = "leacockChodorow", "no common ancestor");
        return 0.0;
    };

    let n = (shortest + 1) as f64;
    (2.0 * f64::from(max_depth)).ln() - n.ln()
}
