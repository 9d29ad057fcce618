//! Constrained search properties.

use semsim_graph::{
    constrained_path_search, shortest_path_length, GraphStore, HirstStOngeConfig,
    PredicateFilter,
};

use crate::common::fixtures::{animal_taxonomy, concept_pairs, generate_taxonomy};

const NODES: usize = 60;
const SEED: u32 = 7;

#[test]
fn test_animal_scores() {
    println!("\n=== TEST: Hirst-St-Onge on animal taxonomy ===");
    let t = animal_taxonomy();
    let config = HirstStOngeConfig::default();
    let filter = PredicateFilter::from("is-a");

    for (a, b, expected) in [
        ("dog", "dog", 8.0),
        ("dog", "mammal", 7.0),
        ("dog", "animal", 6.0),
        ("dog", "cat", 5.0),
        ("dog", "bird", 4.0),
        ("dog", "penguin", 3.0),
    ] {
        let result = constrained_path_search(&t, a, b, &config, &filter);
        println!("  {} -> {}: {} via {:?}", a, b, result.score, result.best_path);
        assert_eq!(result.score, expected, "{} -> {}", a, b);
    }
}

#[test]
fn test_score_bounds_on_generated_taxonomy() {
    let t = generate_taxonomy(NODES, SEED);
    let config = HirstStOngeConfig::default().max_length(4);
    let filter = PredicateFilter::all();

    for (a, b) in concept_pairs(NODES, 15, SEED) {
        let result = constrained_path_search(&t, &a, &b, &config, &filter);
        let shortest = shortest_path_length(&t, &a, &b, &filter).expect("connected");

        assert!(result.score >= 0.0 && result.score <= config.c);

        match &result.best_path {
            Some(path) => {
                let length = path.len() - 1;
                assert!(length <= config.max_length);
                assert!(length >= shortest);
                assert_eq!(path.first(), Some(&a));
                assert_eq!(path.last(), Some(&b));
                assert!(result.score <= config.c - shortest as f64);
                assert!(result.completions >= 1);
            }
            None => {
                assert!(shortest > config.max_length, "{} -> {} reachable in {}", a, b, shortest);
                assert_eq!(result.score, 0.0);
            }
        }
    }
}

#[test]
fn test_best_path_changes_match_edges() {
    let t = generate_taxonomy(NODES, SEED);
    let config = HirstStOngeConfig::default();
    let filter = PredicateFilter::from("is-a");

    for (a, b) in concept_pairs(NODES, 10, SEED + 1) {
        let result = constrained_path_search(&t, &a, &b, &config, &filter);
        let Some(path) = result.best_path else {
            continue;
        };

        // Recount reversals from the edges actually present.
        let mut changes = 0;
        let mut last_up: Option<bool> = None;
        for step in path.windows(2) {
            let up = t
                .outgoing_edges(&step[0])
                .iter()
                .any(|e| e.neighbor == step[1] && e.predicate == "is-a");
            if let Some(prev) = last_up {
                if prev != up {
                    changes += 1;
                }
            }
            last_up = Some(up);
        }
        assert_eq!(changes, result.direction_changes, "path {:?}", path);
        assert_eq!(
            result.score.max(0.0),
            (config.c - (path.len() - 1) as f64 - config.k * changes as f64).max(0.0)
        );
    }
}
