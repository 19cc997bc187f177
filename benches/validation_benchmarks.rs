use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use magic_box::{evaluate, evaluate_rows, Grid};
use std::hint::black_box;

/// Generate an n×n grid for a given scenario
fn generate_grid(n: usize, scenario: &str) -> Vec<Vec<i64>> {
    match scenario {
        // Cyclic Latin square: rows and columns agree, diagonals usually do not
        "latin" => (0..n)
            .map(|r| (0..n).map(|c| ((r + c) % n) as i64).collect())
            .collect(),
        "uniform" => vec![vec![7; n]; n],
        "row_major" => (0..n)
            .map(|r| (0..n).map(|c| (r * n + c) as i64).collect())
            .collect(),
        _ => vec![vec![1; n]; n],
    }
}

/// Benchmark evaluation for the sizes the session offers
fn bench_session_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_session_sizes");

    for n in [3usize, 4, 5] {
        let grid = Grid::from_rows(&generate_grid(n, "row_major")).unwrap();
        group.bench_with_input(BenchmarkId::new("size", n), &grid, |b, grid| {
            b.iter(|| black_box(evaluate(black_box(grid))))
        });
    }

    group.finish();
}

/// Benchmark evaluation scalability with larger grids
fn bench_evaluate_scalability(c: &mut Criterion) {
    let scenarios = ["latin", "uniform", "row_major"];
    let sizes = [16usize, 64, 256, 1_024];

    let mut group = c.benchmark_group("evaluate_scalability");

    for scenario in scenarios {
        for &n in &sizes {
            let grid = Grid::from_rows(&generate_grid(n, scenario)).unwrap();
            group.throughput(Throughput::Elements((n * n) as u64));
            group.bench_with_input(
                BenchmarkId::new(scenario, n),
                &grid,
                |b, grid| b.iter(|| black_box(evaluate(black_box(grid)))),
            );
        }
    }

    group.finish();
}

/// Benchmark the raw-matrix entry point, including the shape check
fn bench_evaluate_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_rows");

    for &n in &[5usize, 100, 500] {
        let rows = generate_grid(n, "latin");
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::new("size", n), &rows, |b, rows| {
            b.iter(|| black_box(evaluate_rows(black_box(rows))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_session_sizes,
    bench_evaluate_scalability,
    bench_evaluate_rows
);
criterion_main!(benches);
