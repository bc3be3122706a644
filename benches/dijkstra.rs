use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use densegraph::algorithm::{compute_distances_with, TieBreak};
use densegraph::graph::{VertexIndex, WeightMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_dense_matrix(n: usize, density: f64, seed: u64) -> WeightMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = WeightMatrix::with_no_edges(n).unwrap();

    // Ring keeps every vertex reachable from 0
    for i in 0..n {
        let next = (i + 1) % n;
        matrix
            .set_edge(VertexIndex(i), VertexIndex(next), Some(rng.gen_range(1..100)))
            .unwrap();
    }

    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(density) {
                matrix
                    .set_edge(VertexIndex(i), VertexIndex(j), Some(rng.gen_range(1..100)))
                    .unwrap();
            }
        }
    }

    matrix
}

fn bench_dense_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_dijkstra");

    for &n in &[16usize, 64, 256, 512] {
        let matrix = create_dense_matrix(n, 0.5, 42);

        group.bench_with_input(BenchmarkId::new("lowest_index", n), &matrix, |b, m| {
            b.iter(|| compute_distances_with(black_box(m), VertexIndex(0), TieBreak::LowestIndex))
        });

        group.bench_with_input(BenchmarkId::new("highest_index", n), &matrix, |b, m| {
            b.iter(|| compute_distances_with(black_box(m), VertexIndex(0), TieBreak::HighestIndex))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dense_dijkstra);
criterion_main!(benches);
