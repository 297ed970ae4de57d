//! Criterion benchmarks for the ACO strategies and tour construction.
//!
//! Uses random uniform graphs so timings reflect the engine alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_aco::aco::sampler::{construct_tour, SamplerParams};
use u_aco::aco::{AcoConfig, AcoRunner, PheromoneMatrix};
use u_aco::graph::CostMatrix;
use u_aco::random::create_rng;

fn random_graph(n: usize) -> CostMatrix {
    CostMatrix::random_uniform(n, 2.0, 4.0, &mut create_rng(42)).unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_strategies");
    group.sample_size(10);

    let graph = random_graph(30);
    for config in [
        AcoConfig::ant_system(),
        AcoConfig::elitist(),
        AcoConfig::rank_based(),
        AcoConfig::colony_system(),
        AcoConfig::max_min(),
    ] {
        let config = config.with_iterations(50).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(config.strategy.name(), 30),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(&graph), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_construction");

    for &n in &[20, 50, 100] {
        let graph = random_graph(n);
        let pheromone = PheromoneMatrix::new(n, 1.0);
        for (label, dropout) in [("plain", None), ("dropout", Some(0.01))] {
            let params = SamplerParams {
                alpha: 1.0,
                beta: 3.0,
                dropout,
            };
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, _| {
                let mut rng = create_rng(7);
                b.iter(|| {
                    let tour = construct_tour(black_box(&graph), &pheromone, &params, &mut rng);
                    black_box(tour)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_construction);
criterion_main!(benches);
