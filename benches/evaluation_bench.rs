//! Benchmarks for mesh function evaluation.
//!
//! Run with: `cargo bench --bench evaluation_bench`
//!
//! Compares per-point evaluation with the batched path, and the two basis
//! evaluation strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lagrange_fem::{BasisEvaluation, FeFunction, LagrangeBasis, Mesh1D};

/// Scattered query points covering [0, 1].
fn generate_points(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| ((i as f64) * 0.618_033_988_749_895).fract())
        .collect()
}

fn bench_scalar_vs_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_vs_batch");

    let mesh = Mesh1D::uniform(0.0, 1.0, 200, 3).unwrap();
    let basis = LagrangeBasis::equispaced(3).unwrap();
    let dofs = mesh.interpolate(|x| (6.0 * x).sin());
    let fe = FeFunction::new(&mesh, &basis, &dofs).unwrap();

    for n in [100, 1_000, 10_000] {
        let points = generate_points(n);

        group.bench_with_input(BenchmarkId::new("scalar", n), &points, |b, points| {
            b.iter(|| {
                let mut total = 0.0;
                for &p in points {
                    total += fe.evaluate(black_box(p)).unwrap();
                }
                total
            });
        });

        group.bench_with_input(BenchmarkId::new("batch", n), &points, |b, points| {
            b.iter(|| fe.evaluate_batch(black_box(points)).unwrap());
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("batch_parallel", n), &points, |b, points| {
            b.iter(|| fe.evaluate_batch_parallel(black_box(points)).unwrap());
        });
    }

    group.finish();
}

/// Product form versus monomial coefficients with Horner.
fn bench_basis_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("basis_strategy");
    let points = generate_points(1_000);

    for degree in [2, 5, 8] {
        for strategy in [BasisEvaluation::Product, BasisEvaluation::Coefficients] {
            let basis = LagrangeBasis::equispaced(degree)
                .unwrap()
                .with_evaluation(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), degree),
                &basis,
                |b, basis| {
                    b.iter(|| basis.evaluate_matrix(black_box(&points)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_vs_batch, bench_basis_strategy);
criterion_main!(benches);
