use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;

use bmssp_sssp::{Dijkstra, DirectedGraph, MutableGraph, Solver};

fn random_graph(vertices: usize, avg_out_degree: usize, seed: u64) -> DirectedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_capacity(vertices);
    for u in 0..vertices {
        for _ in 0..avg_out_degree {
            let v = rng.gen_range(0..vertices);
            let weight: f64 = rng.gen_range(0.0..100.0);
            graph.add_edge(u, v, weight);
        }
    }
    graph
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sssp");
    for &size in &[100usize, 1_000, 10_000] {
        let graph = random_graph(size, 4, 42);

        group.bench_with_input(BenchmarkId::new("bmssp", size), &graph, |b, graph| {
            let solver = Solver::new(graph.clone()).expect("valid graph");
            b.iter(|| black_box(solver.solve(0).expect("solve")));
        });

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            let dijkstra = Dijkstra::new();
            b.iter(|| black_box(dijkstra.solve(graph, 0).expect("solve")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
