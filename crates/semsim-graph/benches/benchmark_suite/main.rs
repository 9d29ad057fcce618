//! Benchmark suite for the semsim-graph crate.
//!
//! Covers the traversal primitives every measure is built from and the
//! constrained path search, on deterministic generated taxonomies.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package semsim-graph
//!
//! # Run specific benchmark
//! cargo bench --package semsim-graph -- constrained
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;


mod traversal_benches;

// ============================================================================
// CRITERION SETUP
// ============================================================================

criterion_group!(
    name = traversal_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = traversal_benches::bench_shortest_path,
        traversal_benches::bench_depth_and_lca
);

criterion_group!(
    name = constrained_bench_group;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5));
    targets = constrained_benches::bench_constrained_search
);

criterion_main!(traversal_bench_group, constrained_bench_group);
