//! Circular paths and evenly spaced sampling along them.

use crate::error::FieldError;
use crate::float::Float;
use crate::vec::Vec2;

/// A circle traversed counter-clockwise from angle zero.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "CirclePathFields<F>",
        bound(deserialize = "F: serde::Deserialize<'de>")
    )
)]
pub struct CirclePath<F: Float> {
    center: Vec2<F>,
    radius: F,
}

/// Unchecked wire form of [`CirclePath`]; deserialization goes through
/// [`CirclePath::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CirclePathFields<F: Float> {
    center: Vec2<F>,
    radius: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<CirclePathFields<F>> for CirclePath<F> {
    type Error = FieldError;

    fn try_from(fields: CirclePathFields<F>) -> Result<Self, FieldError> {
        CirclePath::new(fields.center, fields.radius)
    }
}

impl<F: Float> CirclePath<F> {
    pub fn new(center: Vec2<F>, radius: F) -> Result<Self, FieldError> {
        if !(radius > F::zero()) || !radius.is_finite() {
            return Err(FieldError::InvalidRadius);
        }
        Ok(CirclePath { center, radius })
    }

    /// Circle of `radius` around the origin.
    pub fn centered(radius: F) -> Result<Self, FieldError> {
        Self::new(Vec2::zero(), radius)
    }

    pub fn center(&self) -> Vec2<F> { self.center }
    pub fn radius(&self) -> F { self.radius }

    /// The same circle moved by `offset`.
    pub fn shifted(&self, offset: Vec2<F>) -> Self {
        CirclePath { center: self.center + offset, radius: self.radius }
    }

    pub fn circumference(&self) -> F {
        F::two() * F::pi() * self.radius
    }

    /// `center + radius * (cos angle, sin angle)`
    pub fn point_at(&self, angle: F) -> Vec2<F> {
        self.center + Vec2::from_angle(angle).scale(self.radius)
    }

    /// `steps + 1` points from `start_angle` through `start_angle + sweep`.
    ///
    /// Consecutive points are the `(begin, end)` pairs of a partitioned run.
    pub fn samples(&self, steps: usize, start_angle: F, sweep: F) -> ArcSamples<F> {
        ArcSamples { path: *self, steps, start_angle, sweep, next: 0 }
    }
}

/// Iterator over evenly spaced points on a [`CirclePath`].
#[derive(Clone, Debug)]
pub struct ArcSamples<F: Float> {
    path: CirclePath<F>,
    steps: usize,
    start_angle: F,
    sweep: F,
    next: usize,
}

impl<F: Float> Iterator for ArcSamples<F> {
    type Item = Vec2<F>;

    fn next(&mut self) -> Option<Vec2<F>> {
        if self.steps == 0 || self.next > self.steps {
            return None;
        }
        // angle from the index, not a running sum: the last sample is exactly start + sweep
        let t = F::from_usize(self.next) / F::from_usize(self.steps);
        self.next += 1;
        Some(self.path.point_at(self.start_angle + self.sweep * t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.steps == 0 { 0 } else { self.steps + 1 - self.next.min(self.steps + 1) };
        (remaining, Some(remaining))
    }
}

impl<F: Float> ExactSizeIterator for ArcSamples<F> {}
