//! Step observer trait for monitoring integration progress.

use crate::float::Float;
use crate::state::ParticleState;

/// Trait for observing constrained integration steps.
///
/// Implement this trait to monitor the integrator (e.g., for debugging,
/// trail drawing, or energy plots). All methods have default no-op
/// implementations.
pub trait StepObserver<F: Float> {
    /// Called after each sub-step with the projected, damped state.
    fn on_substep(&mut self, _substep: usize, _state: &ParticleState<F>) {}

    /// Called when an `advance` call has completed all of its sub-steps.
    fn on_step_complete(&mut self, _state: &ParticleState<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Emits a `tracing` event for every completed step, and for every sub-step
/// at `TRACE` level.
#[derive(Debug, Default)]
pub struct TracingObserver {
    steps: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        TracingObserver { steps: 0 }
    }

    /// Number of completed `advance` calls seen so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<F: Float> StepObserver<F> for TracingObserver {
    fn on_substep(&mut self, substep: usize, state: &ParticleState<F>) {
        tracing::trace!(
            step = self.steps,
            substep,
            x = %state.position.x,
            y = %state.position.y,
            speed = %state.speed(),
            "sub-step"
        );
    }

    fn on_step_complete(&mut self, state: &ParticleState<F>) {
        tracing::debug!(
            step = self.steps,
            x = %state.position.x,
            y = %state.position.y,
            speed = %state.speed(),
            "step complete"
        );
        self.steps += 1;
    }
}
