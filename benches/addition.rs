//! Benchmarks for CSR and dense addition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matsum::{add_csr_parallel, add_csr_with, add_dense, DenseMatrix, SparseMatrixCSR, TidyConfig};

/// Banded test matrix with `width` diagonals starting at `first`
fn create_banded(n: usize, first: usize, width: usize) -> SparseMatrixCSR<f64> {
    let triplets: Vec<_> = (0..n)
        .flat_map(|i| {
            (first..first + width)
                .map(move |k| (i, (i + k) % n, 1.0 + k as f64))
        })
        .collect();
    SparseMatrixCSR::from_triplets(n, n, &triplets)
}

fn bench_csr_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_add");
    let tidy = TidyConfig::default();

    for &n in &[1_000, 10_000, 100_000] {
        let a = create_banded(n, 0, 5);
        let b = create_banded(n, 3, 5);

        group.bench_with_input(BenchmarkId::new("serial", n), &n, |bench, _| {
            bench.iter(|| add_csr_with(black_box(&a), black_box(&b), 1.0, &tidy))
        });
        group.bench_with_input(BenchmarkId::new("serial_scaled", n), &n, |bench, _| {
            bench.iter(|| add_csr_with(black_box(&a), black_box(&b), -0.5, &tidy))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |bench, _| {
            bench.iter(|| add_csr_parallel(black_box(&a), black_box(&b), 1.0, &tidy))
        });
    }

    group.finish();
}

fn bench_dense_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_add");

    for &n in &[64, 256, 1024] {
        let values: Vec<f64> = (0..n * n).map(|k| k as f64).collect();
        let row_major = DenseMatrix::new(n, n, values.clone(), false);
        let col_major = DenseMatrix::new(n, n, values, true);

        group.bench_with_input(BenchmarkId::new("same_layout", n), &n, |bench, _| {
            bench.iter(|| add_dense(black_box(&row_major), black_box(&row_major), 2.0))
        });
        group.bench_with_input(BenchmarkId::new("mixed_layout", n), &n, |bench, _| {
            bench.iter(|| add_dense(black_box(&row_major), black_box(&col_major), 2.0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_csr_add, bench_dense_add);
criterion_main!(benches);
