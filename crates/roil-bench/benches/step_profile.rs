//! Criterion benchmarks for the full step pipeline at the reference and
//! stress profiles.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roil_bench::{reference_profile, stress_profile};
use roil_grid::Cell;
use roil_solver::Simulation;

/// Benchmark: one full step on the 100x100 reference profile with a
/// live emitter, the shape of an interactive frame.
fn bench_step_reference(c: &mut Criterion) {
    let mut sim = Simulation::new(reference_profile()).unwrap();

    c.bench_function("step_reference_100", |b| {
        b.iter(|| {
            sim.inject_density(Cell::new(50, 50), 150.0).unwrap();
            sim.inject_velocity(Cell::new(50, 50), 3.0, 1.0).unwrap();
            let report = sim.step().unwrap();
            black_box(report.divergence_residual);
        });
    });
}

/// Benchmark: one full step on the ~100K-cell stress profile.
fn bench_step_stress(c: &mut Criterion) {
    let mut sim = Simulation::new(stress_profile()).unwrap();

    c.bench_function("step_stress_316", |b| {
        b.iter(|| {
            sim.inject_density(Cell::new(158, 158), 150.0).unwrap();
            sim.inject_velocity(Cell::new(158, 158), 3.0, 1.0).unwrap();
            let report = sim.step().unwrap();
            black_box(report.divergence_residual);
        });
    });
}

criterion_group!(benches, bench_step_reference, bench_step_stress);
criterion_main!(benches);
