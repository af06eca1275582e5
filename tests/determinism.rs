use core::f64::consts::PI;

use fieldwork::{
    integrate_along, CirclePath, ConstrainedIntegrator, FieldKind, IntegratorConfig,
    NoOpStepObserver, ParticleState, Vec2,
};

#[test]
fn integrator_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let integrator = ConstrainedIntegrator::new(
            IntegratorConfig::new().with_sub_steps(10).with_drag(0.999),
        ).unwrap();
        let mut state = ParticleState::new(Vec2::new(2.0, 0.0), Vec2::new(0.0, 10.0));
        integrator.run(&mut state, 1.0 / 60.0, 500, &FieldKind::AssignedShift, &mut NoOpStepObserver).unwrap();
        state
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0].position.x, r.position.x);
        assert_eq!(results[0].position.y, r.position.y);
        assert_eq!(results[0].velocity.x, r.velocity.x);
        assert_eq!(results[0].velocity.y, r.velocity.y);
    }
}

#[test]
fn partitioned_run_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let path = CirclePath::centered(2.0).unwrap().shifted(Vec2::new(1.0, 1.0));
        integrate_along(&path, &FieldKind::Assigned, 150, 0.0, 2.0 * PI).unwrap()
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0].total_work, r.total_work);
        assert_eq!(results[0].total_length, r.total_length);
        for (a, b) in results[0].plot_points.iter().zip(r.plot_points.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
