#![allow(clippy::suboptimal_flops)]

use fieldwork::{
    partition, ConstrainedIntegrator, FieldKind, IntegratorConfig, NoOpStepObserver,
    ParticleState, Vec2, ZeroField,
};
use proptest::prelude::*;

fn field_kind() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Assigned),
        Just(FieldKind::AssignedShift),
        Just(FieldKind::Textbook),
    ]
}

// =============================================================================
// Constrained integrator invariants
// =============================================================================

proptest! {
    #[test]
    fn stays_on_circle_and_tangential(
        radius in 0.5f64..10.0,
        angle in -3.1f64..3.1,
        tangential in -10.0f64..10.0,
        radial in -1.0f64..1.0,
        sub_steps in 1usize..20,
        drag in 0.9f64..=1.0,
        steps in 1usize..60,
        kind in field_kind(),
    ) {
        let integrator = ConstrainedIntegrator::new(
            IntegratorConfig::new().with_radius(radius).with_sub_steps(sub_steps).with_drag(drag),
        ).unwrap();
        let dir = Vec2::from_angle(angle);
        let velocity = dir.perp().scale(tangential) + dir.scale(radial);
        let mut state = ParticleState::new(dir.scale(radius), velocity);

        for _ in 0..steps {
            integrator.advance(&mut state, 1.0 / 60.0, &kind, &mut NoOpStepObserver).unwrap();
            let r = state.position.length();
            prop_assert!((r - radius).abs() <= 1e-9 * radius, "|p| = {}, radius = {}", r, radius);
            let scale = (radius * state.speed()).max(1.0);
            prop_assert!(
                state.velocity.dot(state.position).abs() <= 1e-9 * scale,
                "v . p = {}", state.velocity.dot(state.position)
            );
        }
    }

    #[test]
    fn speed_never_grows_without_field(
        speed in 0.1f64..20.0,
        sub_steps in 1usize..10,
        drag in 0.5f64..=1.0,
    ) {
        let integrator = ConstrainedIntegrator::new(
            IntegratorConfig::new().with_sub_steps(sub_steps).with_drag(drag),
        ).unwrap();
        let mut state = ParticleState::new(Vec2::new(2.0, 0.0), Vec2::new(0.0, speed));

        let mut prev = state.speed();
        for _ in 0..30 {
            integrator.advance(&mut state, 1.0 / 60.0, &ZeroField, &mut NoOpStepObserver).unwrap();
            prop_assert!(state.speed() <= prev * (1.0 + 1e-12));
            if drag < 1.0 {
                prop_assert!(state.speed() < prev);
            }
            prev = state.speed();
        }
    }
}

// =============================================================================
// Work partition identity
// =============================================================================

proptest! {
    #[test]
    fn rectangle_area_is_work(
        bx in -5.0f64..5.0,
        by in -5.0f64..5.0,
        dx in -3.0f64..3.0,
        dy in -3.0f64..3.0,
        kind in field_kind(),
    ) {
        prop_assume!(dx.abs() > 1e-6 || dy.abs() > 1e-6);
        let begin = Vec2::new(bx, by);
        let end = Vec2::new(bx + dx, by + dy);
        prop_assume!(begin != end);

        let (sample, rect) = partition(begin, end, &kind).unwrap();
        let tol = 1e-12 * sample.work.abs().max(1.0);
        prop_assert!((sample.width * sample.height - sample.work).abs() <= tol);
        prop_assert!((rect.area() - sample.work).abs() <= tol);
        prop_assert!(sample.width > 0.0);
    }

    #[test]
    fn anchoring_preserves_area(
        s in 0.0f64..50.0,
        bx in -5.0f64..5.0,
        dx in 0.01f64..3.0,
    ) {
        let (_, rect) = partition(Vec2::new(bx, 1.0), Vec2::new(bx + dx, 1.5), &FieldKind::Textbook).unwrap();
        let moved = rect.anchored_at(s);
        prop_assert!((moved.corners[0].x - s).abs() < 1e-12);
        prop_assert!((moved.area() - rect.area()).abs() <= 1e-9 * rect.area().abs().max(1.0));
    }
}
