//! # Quasi-Kernel Engine Benchmarks
//!
//! Performance validation for the hot paths of each subsystem:
//!
//! | Subsystem | Operation | Expectation |
//! |-----------|-----------|-------------|
//! | qk-01 operator | single evaluation | tens of ns, both forms |
//! | qk-02 dynamics | metriplectic step | < 1μs |
//! | qk-03 lindblad | dense mul / RK4 step | O(d³), d ≤ 64 |
//! | qk-04 laser | full system build | < 10ms at d = 48 |
//! | qk-05 pool | tick at full capacity | < 1ms for 256 records |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use rand::Rng;

use qk_01_operator::fixed::fixed_operator_value;
use qk_01_operator::operator_value_default;
use qk_02_dynamics::{DynamicsConfig, ScalarObservables, ScalarState};
use qk_03_lindblad::{step_rk4, ComplexMatrix};
use qk_04_laser::{build_system, LaserParams};
use qk_05_pool::{PoolConfig, ResourcePool};

// ============================================================================
// QK-01: Operator Evaluation
// ============================================================================

fn bench_operator_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qk-01-operator");

    group.bench_function("golden_f64", |b| {
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            black_box(operator_value_default(black_box(n)))
        })
    });

    group.bench_function("fixed_q16", |b| {
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            black_box(fixed_operator_value(black_box(n), 0))
        })
    });

    group.finish();
}

// ============================================================================
// QK-02: Scalar Dynamics
// ============================================================================

fn bench_scalar_dynamics(c: &mut Criterion) {
    let mut group = c.benchmark_group("qk-02-dynamics");
    let config = DynamicsConfig::default();

    group.bench_function("advance", |b| {
        let mut state = ScalarState::new();
        b.iter(|| {
            state.advance(&config);
            black_box(state.theta)
        })
    });

    group.bench_function("observables_compute", |b| {
        let mut state = ScalarState::new();
        for _ in 0..100 {
            state.advance(&config);
        }
        b.iter(|| black_box(ScalarObservables::compute(&state, &config)))
    });

    group.finish();
}

// ============================================================================
// QK-03: Matrix Engine
// ============================================================================

fn random_matrix(dim: usize) -> ComplexMatrix {
    let mut rng = rand::thread_rng();
    let mut m = ComplexMatrix::zeros(dim, dim).expect("matrix");
    for i in 0..dim {
        for j in 0..dim {
            m.set(
                i,
                j,
                Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            )
            .expect("entry");
        }
    }
    m
}

fn bench_matrix_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("qk-03-lindblad");
    group.measurement_time(Duration::from_secs(5));

    for dim in [4usize, 8, 16, 32] {
        let a = random_matrix(dim);
        let b_mat = random_matrix(dim);
        group.throughput(Throughput::Elements((dim * dim * dim) as u64));
        group.bench_with_input(BenchmarkId::new("matrix_mul", dim), &dim, |b, _| {
            b.iter(|| black_box(a.mul(&b_mat).expect("mul")))
        });
    }

    // One RK4 step of the full laser system at the demo dimension.
    let mut params = LaserParams::default();
    params.dim_cavity = 4;
    let (system, rho0) = build_system(&params).expect("system");
    group.bench_function("rk4_step_dim16", |b| {
        let mut rho = rho0.clone();
        b.iter(|| {
            step_rk4(&system, &mut rho, 0.01).expect("step");
            black_box(rho.trace())
        })
    });

    group.finish();
}

// ============================================================================
// QK-04: Laser Construction
// ============================================================================

fn bench_laser_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("qk-04-laser");

    let params = LaserParams::default();
    group.bench_function("build_system_dim48", |b| {
        b.iter(|| black_box(build_system(&params).expect("build")))
    });

    group.finish();
}

// ============================================================================
// QK-05: Pool Tick
// ============================================================================

fn bench_pool_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("qk-05-pool");

    let dynamics = DynamicsConfig::default();
    let config = PoolConfig::default();
    let capacity = config.capacity;
    let mut pool = ResourcePool::new(config, dynamics);
    for _ in 0..capacity {
        pool.allocate(4096).expect("page");
    }

    group.throughput(Throughput::Elements(capacity as u64));
    group.bench_function("tick_full_256", |b| b.iter(|| pool.tick()));

    group.finish();
}

criterion_group!(
    benches,
    bench_operator_evaluation,
    bench_scalar_dynamics,
    bench_matrix_engine,
    bench_laser_build,
    bench_pool_tick,
);

criterion_main!(benches);
