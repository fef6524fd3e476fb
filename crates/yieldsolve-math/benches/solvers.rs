//! Benchmarks for the root-finding solvers.
//!
//! Run with: cargo bench -p yieldsolve-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use yieldsolve_math::solvers::{
    bisection, newton_raphson, newton_raphson_numerical, scan_sign_changes, FiniteDifference,
    SolverConfig,
};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Price minus target for a semiannual bullet bond, yield quoted annually.
fn price_gap(y: f64, coupon: f64, periods: i32, target: f64) -> f64 {
    let r = y / 2.0;
    let mut pv = 0.0;
    for t in 1..=periods {
        pv += coupon / (1.0 + r).powi(t);
    }
    pv + 100.0 / (1.0 + r).powi(periods) - target
}

fn price_gap_derivative(y: f64, coupon: f64, periods: i32) -> f64 {
    let r = y / 2.0;
    let mut dpv = 0.0;
    for t in 1..=periods {
        dpv -= 0.5 * f64::from(t) * coupon / (1.0 + r).powi(t + 1);
    }
    dpv - 0.5 * f64::from(periods) * 100.0 / (1.0 + r).powi(periods + 1)
}

fn irr_fixture(r: f64) -> f64 {
    9702.0 - 19700.0 / (1.0 + r) + 10000.0 / (1.0 + r).powi(2)
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_yield_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_solvers");
    let config = SolverConfig::precise();

    for periods in [10, 60] {
        group.bench_with_input(BenchmarkId::new("newton", periods), &periods, |b, &n| {
            b.iter(|| {
                newton_raphson(
                    |y| price_gap(y, 2.5, n, 95.0),
                    |y| price_gap_derivative(y, 2.5, n),
                    black_box(0.05),
                    &config,
                )
            });
        });

        group.bench_with_input(
            BenchmarkId::new("newton_forward_difference", periods),
            &periods,
            |b, &n| {
                b.iter(|| {
                    newton_raphson_numerical(
                        |y| price_gap(y, 2.5, n, 95.0),
                        black_box(0.05),
                        FiniteDifference::default(),
                        &config,
                    )
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("bisection", periods), &periods, |b, &n| {
            b.iter(|| {
                bisection(
                    |y| price_gap(y, 2.5, n, 95.0),
                    black_box(0.0),
                    black_box(0.2),
                    &config,
                )
            });
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    c.bench_function("scan_irr_fixture", |b| {
        b.iter(|| scan_sign_changes(irr_fixture, black_box(0.0), black_box(1.0), 0.005));
    });
}

criterion_group!(solvers, bench_yield_solvers);
criterion_group!(scanning, bench_scan);

criterion_main!(solvers, scanning);
