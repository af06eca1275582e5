//! Error types for integration and partitioning.

use thiserror::Error;

/// Broad classification of a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A normalization or division hit a zero-length vector.
    DegenerateGeometry,
    /// A parameter was rejected before any step ran.
    InvalidParameter,
}

/// Errors that can occur while integrating or partitioning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The particle's position had zero norm when projecting onto the circle.
    #[error("position has zero norm at sub-step {substep}; cannot project onto the circle")]
    ZeroNormPosition { substep: usize },
    /// `begin` and `end` of a path segment coincide.
    #[error("path segment has zero length; begin and end must differ")]
    ZeroLengthSegment,
    /// Radius must be positive and finite.
    #[error("radius must be positive and finite")]
    InvalidRadius,
    /// At least one sub-step is required.
    #[error("sub-step count must be at least 1")]
    InvalidSubSteps,
    /// Drag coefficient must be in (0, 1].
    #[error("drag coefficient must be in (0, 1]")]
    InvalidDrag,
    /// Kinetic energy must be non-negative and finite.
    #[error("energy must be non-negative and finite")]
    InvalidEnergy,
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// A partitioned run needs at least one step.
    #[error("step count must be at least 1")]
    InvalidStepCount,
}

impl FieldError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::ZeroNormPosition { .. } | FieldError::ZeroLengthSegment => {
                ErrorKind::DegenerateGeometry
            }
            FieldError::InvalidRadius
            | FieldError::InvalidSubSteps
            | FieldError::InvalidDrag
            | FieldError::InvalidEnergy
            | FieldError::InvalidMass
            | FieldError::InvalidStepCount => ErrorKind::InvalidParameter,
        }
    }
}
