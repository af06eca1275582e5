//! Constrained semi-implicit integrator keeping a particle on a circle.

use crate::config::IntegratorConfig;
use crate::error::FieldError;
use crate::field::ForceField;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::state::ParticleState;

/// Advances a [`ParticleState`] under a force field while holding it on a
/// circle of fixed radius around the origin.
///
/// Each sub-step of length `h = dt / sub_steps`:
///
/// 1. `position += h * velocity`
/// 2. project `position` back onto the circle
/// 3. `velocity += h * field(position)`, using the projected position
/// 4. keep only the component of `velocity` along the tangent
/// 5. `velocity *= drag`
///
/// Positions are updated before velocities, so this is semi-implicit Euler
/// with projection rather than Störmer–Verlet.
#[derive(Copy, Clone, Debug)]
pub struct ConstrainedIntegrator<F: Float> {
    config: IntegratorConfig<F>,
}

impl<F: Float> ConstrainedIntegrator<F> {
    /// Validates `config` once; every later call trusts it.
    pub fn new(config: IntegratorConfig<F>) -> Result<Self, FieldError> {
        config.validate()?;
        Ok(ConstrainedIntegrator { config })
    }

    pub fn config(&self) -> &IntegratorConfig<F> {
        &self.config
    }

    /// Advance `state` by `dt`.
    ///
    /// Returns [`FieldError::ZeroNormPosition`] if the unconstrained step
    /// lands exactly on the origin; `state` then holds the last completed
    /// sub-step.
    pub fn advance<Fld, O>(
        &self,
        state: &mut ParticleState<F>,
        dt: F,
        field: &Fld,
        observer: &mut O,
    ) -> Result<(), FieldError>
    where
        Fld: ForceField<F> + ?Sized,
        O: StepObserver<F>,
    {
        let h = dt / F::from_usize(self.config.sub_steps);

        for substep in 0..self.config.sub_steps {
            let moved = state.position + state.velocity.scale(h);
            let Some(direction) = moved.try_normalize() else {
                tracing::debug!(substep, "position collapsed onto the origin");
                return Err(FieldError::ZeroNormPosition { substep });
            };
            let position = direction.scale(self.config.radius);

            let velocity = state.velocity + field.force(position).scale(h);

            // direction is already unit length, so its perp is the unit tangent
            let tangent = direction.perp();
            let velocity = tangent.scale(velocity.dot(tangent));
            let velocity = velocity.scale(self.config.drag);

            state.position = position;
            state.velocity = velocity;
            observer.on_substep(substep, state);
        }

        observer.on_step_complete(state);
        Ok(())
    }

    /// Advance `state` `steps` times by `dt`, e.g. to replay a fixed number
    /// of frames.
    pub fn run<Fld, O>(
        &self,
        state: &mut ParticleState<F>,
        dt: F,
        steps: usize,
        field: &Fld,
        observer: &mut O,
    ) -> Result<(), FieldError>
    where
        Fld: ForceField<F> + ?Sized,
        O: StepObserver<F>,
    {
        for _ in 0..steps {
            self.advance(state, dt, field, observer)?;
        }
        Ok(())
    }
}

/// One-shot form of [`ConstrainedIntegrator::advance`] with no observer.
pub fn advance<F, Fld>(
    state: &mut ParticleState<F>,
    dt: F,
    field: &Fld,
    config: &IntegratorConfig<F>,
) -> Result<(), FieldError>
where
    F: Float,
    Fld: ForceField<F> + ?Sized,
{
    ConstrainedIntegrator::new(*config)?.advance(state, dt, field, &mut NoOpStepObserver)
}
