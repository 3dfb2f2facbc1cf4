use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use weightgraph::{
    WeightedGraph, algo,
    bench_utils::{GraphShape, generate_graph},
    bellman_ford, dijkstra,
};

const RANDOM_SEED: u64 = 0x99AA;
const GRID_SEED: u64 = 0x77CC;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct ReadyGraph {
    label: String,
    graph: WeightedGraph,
}

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[100, 400]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[100, 400, 900]
    }
}

fn ready_graphs() -> Vec<ReadyGraph> {
    let mut cases = Vec::new();
    for &nodes in bench_scales() {
        let random = generate_graph(
            GraphShape::Random { edges: nodes * 5 },
            nodes,
            0.0..20.0,
            RANDOM_SEED + nodes as u64,
        );
        cases.push(ReadyGraph {
            label: format!("random_{nodes}"),
            graph: random.materialize(),
        });
        let side = (nodes as f64).sqrt() as usize;
        let grid = generate_graph(
            GraphShape::Grid2D {
                width: side,
                height: side,
            },
            side * side,
            1.0..10.0,
            GRID_SEED + nodes as u64,
        );
        cases.push(ReadyGraph {
            label: format!("grid_{}", side * side),
            graph: grid.materialize(),
        });
    }
    cases
}

fn bench_dijkstra(c: &mut Criterion) {
    let cases = ready_graphs();
    let mut group = c.benchmark_group("dijkstra");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &cases {
        group.bench_function(BenchmarkId::from_parameter(&case.label), |b| {
            b.iter(|| dijkstra(&case.graph, 1, false).expect("dijkstra"));
        });
    }
    group.finish();
}

fn bench_bellman_ford(c: &mut Criterion) {
    let cases = ready_graphs();
    let mut group = c.benchmark_group("bellman_ford");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &cases {
        group.bench_function(BenchmarkId::from_parameter(&case.label), |b| {
            b.iter(|| bellman_ford(&case.graph, 1, false).expect("bellman-ford"));
        });
    }
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let cases = ready_graphs();
    let mut group = c.benchmark_group("analyze");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in cases.iter().filter(|case| case.graph.node_count() <= 100) {
        group.bench_function(BenchmarkId::from_parameter(&case.label), |b| {
            b.iter(|| algo::analyze(&case.graph));
        });
    }
    group.finish();
}

criterion_group!(
    name = path_benches;
    config = Criterion::default();
    targets = bench_dijkstra, bench_bellman_ford, bench_analysis
);
criterion_main!(path_benches);
