//! Criterion benchmarks for pricer_models.
//!
//! Measures Black-Scholes pricing (single quantities versus the shared
//! `greeks()` evaluation) and GBM path generation across path lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::EuropeanCall;
use pricer_models::models::{generate_gbm_path, GbmParams, ReplayNormal};

/// Benchmark price and Greeks of a single contract.
fn bench_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");

    let call = EuropeanCall::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();

    group.bench_function("construct", |b| {
        b.iter(|| {
            EuropeanCall::new(
                black_box(100.0_f64),
                black_box(100.0),
                black_box(1.0),
                black_box(0.05),
                black_box(0.2),
            )
            .unwrap()
        });
    });

    group.bench_function("price", |b| b.iter(|| black_box(&call).price()));
    group.bench_function("delta", |b| b.iter(|| black_box(&call).delta()));

    // Four separate calls recompute d1/d2 each time
    group.bench_function("price_delta_gamma_theta", |b| {
        b.iter(|| {
            let call = black_box(&call);
            (call.price(), call.delta(), call.gamma(), call.theta())
        });
    });

    group.bench_function("greeks", |b| b.iter(|| black_box(&call).greeks()));

    group.finish();
}

/// Benchmark GBM path generation with a pre-drawn normal sequence.
fn bench_gbm_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbm_path");

    let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
    let draws: Vec<f64> = (0..1024).map(|i| ((i as f64) * 0.37).sin()).collect();

    for n_steps in [52, 252, 1000] {
        group.bench_with_input(BenchmarkId::new("generate", n_steps), &n_steps, |b, &n| {
            b.iter(|| {
                let mut source = ReplayNormal::new(draws.clone());
                generate_gbm_path(black_box(&params), n, &mut source).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_black_scholes, bench_gbm_paths);
criterion_main!(benches);
