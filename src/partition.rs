//! Riemann-sum partitioning of a line integral along a path.

use crate::error::FieldError;
use crate::field::ForceField;
use crate::float::Float;
use crate::vec::Vec2;

/// Work done over one path segment, and the rectangle representing it on a
/// work-versus-arc-length plot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkSample<F: Float> {
    /// Straight-line length of the segment.
    pub width: F,
    /// Average force component along the segment, `work / width`.
    pub height: F,
    pub work: F,
}

impl<F: Float> WorkSample<F> {
    /// Rectangle with its left edge at arc length zero.
    pub fn rectangle(&self) -> WorkRectangle<F> {
        WorkRectangle {
            corners: [
                Vec2::new(F::zero(), F::zero()),
                Vec2::new(self.width, F::zero()),
                Vec2::new(self.width, self.height),
                Vec2::new(F::zero(), self.height),
            ],
        }
    }
}

/// Four corners, counter-clockwise from the lower left: `(s, 0)`,
/// `(s + width, 0)`, `(s + width, height)`, `(s, height)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkRectangle<F: Float> {
    pub corners: [Vec2<F>; 4],
}

impl<F: Float> WorkRectangle<F> {
    /// Shift the rectangle right by arc length `s`.
    pub fn anchored_at(&self, s: F) -> Self {
        let offset = Vec2::new(s, F::zero());
        WorkRectangle { corners: self.corners.map(|c| c + offset) }
    }

    pub fn width(&self) -> F {
        self.corners[1].x - self.corners[0].x
    }

    pub fn height(&self) -> F {
        self.corners[3].y - self.corners[0].y
    }

    /// Signed area; equals the segment's work.
    pub fn area(&self) -> F {
        self.width() * self.height()
    }
}

/// Work done by `field` moving from `begin` to `end`.
///
/// The field is evaluated at `end` only (right-endpoint rule), so sums over
/// a path converge to the line integral at first order in the step size.
///
/// ```
/// use fieldwork::{partition, FieldKind, Vec2};
///
/// let (sample, rect) = partition(Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0), &FieldKind::Assigned).unwrap();
/// assert_eq!(sample.work, 0.0);
/// assert_eq!(rect.corners[1].x, sample.width);
/// ```
pub fn partition<F, Fld>(
    begin: Vec2<F>,
    end: Vec2<F>,
    field: &Fld,
) -> Result<(WorkSample<F>, WorkRectangle<F>), FieldError>
where
    F: Float,
    Fld: ForceField<F> + ?Sized,
{
    let delta = end - begin;
    let width = delta.length();
    if width == F::zero() {
        return Err(FieldError::ZeroLengthSegment);
    }
    let work = field.force(end).dot(delta);
    let sample = WorkSample { width, height: work / width, work };
    Ok((sample, sample.rectangle()))
}
