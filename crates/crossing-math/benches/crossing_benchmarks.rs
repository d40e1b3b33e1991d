//! Benchmarks for the bracket solver and the midpoint rule.
//!
//! Run with: cargo bench -p crossing-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use crossing_math::prelude::*;

fn bench_find_root(c: &mut Criterion) {
    let config = SolverConfig::default();
    let mut group = c.benchmark_group("find_root");

    let cases = [
        ("hyperbola_exponential", Curve::Hyperbola, Curve::Exponential, -3.0, -2.0),
        ("hyperbola_linear", Curve::Hyperbola, Curve::Linear, -1.0, -0.25),
        ("linear_exponential", Curve::Linear, Curve::Exponential, 1.0, 2.0),
    ];

    for (name, f, g, a, b) in cases {
        group.bench_function(name, |bench| {
            bench.iter(|| find_root(black_box(&f), black_box(&g), a, b, &config));
        });
    }

    group.finish();
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    for precision in [1e-2, 1e-4, 1e-6] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |bench, &precision| {
                bench.iter(|| {
                    integrate(
                        black_box(&Curve::Linear),
                        black_box(&Curve::Exponential),
                        -0.55,
                        1.25,
                        precision,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_enclosed_area(c: &mut Criterion) {
    let config = AreaConfig::default();
    c.bench_function("enclosed_area", |bench| {
        bench.iter(|| enclosed_area(black_box(&config)));
    });
}

fn bench_fast_inv_sqrt(c: &mut Criterion) {
    c.bench_function("fast_inv_sqrt", |bench| {
        bench.iter(|| fast_inv_sqrt(black_box(0.0024)));
    });
}

criterion_group!(
    benches,
    bench_find_root,
    bench_integrate,
    bench_enclosed_area,
    bench_fast_inv_sqrt
);
criterion_main!(benches);
