//! Benchmarks for the integrator and partitioned runs.

use core::f64::consts::PI;

use criterion::{criterion_group, criterion_main, Criterion};
use fieldwork::*;

fn bench_integrator(c: &mut Criterion) {
    c.bench_function("advance_10_substeps_600_steps", |b| {
        b.iter(|| {
            let integrator = ConstrainedIntegrator::new(
                IntegratorConfig::new().with_sub_steps(10),
            ).unwrap();
            let mut state = ParticleState::new(Vec2::new(2.0, 0.0), Vec2::new(0.0, 10.0));
            integrator.run(&mut state, 1.0 / 60.0, 600, &FieldKind::AssignedShift, &mut NoOpStepObserver).unwrap();
            state
        });
    });
}

fn bench_partitioned_run(c: &mut Criterion) {
    c.bench_function("integrate_along_150_steps", |b| {
        b.iter(|| {
            let path = CirclePath::centered(2.0).unwrap().shifted(Vec2::new(1.0, 1.0));
            integrate_along(&path, &FieldKind::Assigned, 150, 0.0, 2.0 * PI).unwrap().total_work
        });
    });
}

criterion_group!(benches, bench_integrator, bench_partitioned_run);
criterion_main!(benches);
