// ─────────────────────────────────────────────────────────────────────
// HHV Cosmology Kernel — TRP Engine Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the closed-form hot path: every query is
//! O(1) arithmetic, with no iterative solver anywhere.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hhv_math::CmbParams;
use hhv_trp::TrpEngine;
use hhv_types::TrpConfig;

fn planck_engine() -> TrpEngine {
    let pivot = CmbParams::planck2018().pivot().unwrap();
    TrpEngine::new(TrpConfig::default(), pivot).unwrap()
}

fn bench_t(c: &mut Criterion) {
    let engine = planck_engine();
    let pivot = *engine.pivot();
    c.bench_function("trp_t", |b| {
        b.iter(|| {
            engine.t(
                black_box(pivot.ne_star),
                black_box(pivot.hi_star),
                black_box(0.01),
            )
        })
    });
}

fn bench_decompose_t(c: &mut Criterion) {
    let engine = planck_engine();
    let pivot = *engine.pivot();
    c.bench_function("trp_decompose_t", |b| {
        b.iter(|| {
            engine.decompose_t(
                black_box(pivot.ne_star),
                black_box(pivot.hi_star),
                black_box(0.01),
            )
        })
    });
}

fn bench_epsilon_max(c: &mut Criterion) {
    let engine = planck_engine();
    let pivot = *engine.pivot();
    c.bench_function("trp_epsilon_max", |b| {
        b.iter(|| engine.epsilon_max(black_box(pivot.ne_star), black_box(pivot.hi_star)))
    });
}

fn bench_epsilon_max_batch_1000(c: &mut Criterion) {
    let engine = planck_engine();
    let pivot = *engine.pivot();
    let ne: Vec<f64> = (0..1000).map(|i| 50.0 + 0.02 * i as f64).collect();
    let h_i: Vec<f64> = (0..1000)
        .map(|i| pivot.hi_star * (0.5 + 0.001 * i as f64))
        .collect();
    c.bench_function("trp_epsilon_max_batch_1000", |b| {
        b.iter(|| engine.epsilon_max_batch(black_box(&ne), black_box(&h_i)))
    });
}

criterion_group!(
    benches,
    bench_t,
    bench_decompose_t,
    bench_epsilon_max,
    bench_epsilon_max_batch_1000,
);
criterion_main!(benches);
