//! BFS primitive benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use semsim_graph::{lowest_common_ancestors, rooted_depth, shortest_path_length, PredicateFilter};

use super::config;
use super::generators::{concept, concept_pairs, generate_taxonomy};

/// Benchmark undirected shortest paths.
pub fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    let filter = PredicateFilter::all();

    for &node_count in config::TAXONOMY_SIZES {
        let taxonomy = generate_taxonomy(node_count);
        let pairs = concept_pairs(node_count, 16);

        group.bench_with_input(BenchmarkId::new("pairs16", node_count), &node_count, |b, _| {
            b.iter(|| {
                for (a, z) in &pairs {
                    black_box(shortest_path_length(
                        black_box(&taxonomy),
                        black_box(a),
                        black_box(z),
                        &filter,
                    ));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark forward traversals: depth of a leaf and LCA of two leaves.
pub fn bench_depth_and_lca(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_bfs");
    let filter = PredicateFilter::from("is-a");

    for &node_count in config::TAXONOMY_SIZES {
        let taxonomy = generate_taxonomy(node_count);
        let leaf_a = concept(node_count - 1);
        let leaf_b = concept(node_count / 2);

        group.bench_with_input(BenchmarkId::new("depth", node_count), &node_count, |b, _| {
            b.iter(|| rooted_depth(black_box(&taxonomy), black_box(&leaf_a), &filter))
        });

        group.bench_with_input(BenchmarkId::new("lca", node_count), &node_count, |b, _| {
            b.iter(|| {
                lowest_common_ancestors(
                    black_box(&taxonomy),
                    black_box(&leaf_a),
                    black_box(&leaf_b),
                    &filter,
                )
            })
        });
    }

    group.finish();
}
