//! Particle state advanced by the constrained integrator.

use crate::error::FieldError;
use crate::float::Float;
use crate::vec::Vec2;

/// Position and velocity of a point mass.
///
/// A plain value: whatever draws the particle reads it, but the integrator is
/// the only thing that mutates it during a simulation phase.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleState<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
}

impl<F: Float> ParticleState<F> {
    pub fn new(position: Vec2<F>, velocity: Vec2<F>) -> Self {
        ParticleState { position, velocity }
    }

    pub fn speed(&self) -> F {
        self.velocity.length()
    }

    /// `½·m·|v|²`.
    pub fn kinetic_energy(&self, mass: F) -> F {
        mass * self.velocity.length_sq() / F::two()
    }

    /// Radial component of the velocity relative to the origin.
    ///
    /// Zero (up to rounding) after every constrained step.
    pub fn radial_velocity(&self) -> F {
        match self.position.try_normalize() {
            Some(dir) => self.velocity.dot(dir),
            None => F::zero(),
        }
    }
}

/// Speed at which a particle of `mass` carries kinetic energy `energy`.
///
/// Used to launch a free-motion phase with the work accumulated along a
/// partitioned path.
pub fn launch_speed<F: Float>(energy: F, mass: F) -> Result<F, FieldError> {
    if !(energy >= F::zero()) || !energy.is_finite() {
        return Err(FieldError::InvalidEnergy);
    }
    if !(mass > F::zero()) || !mass.is_finite() {
        return Err(FieldError::InvalidMass);
    }
    Ok((F::two() * energy / mass).sqrt())
}
