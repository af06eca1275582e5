//! Accumulating partitioned work over a whole path.

use alloc::vec::Vec as AllocVec;

use crate::error::FieldError;
use crate::field::ForceField;
use crate::float::Float;
use crate::partition::{partition, WorkRectangle, WorkSample};
use crate::path::CirclePath;
use crate::vec::Vec2;

/// Running totals for one partitioned traversal.
///
/// Feed it consecutive, non-overlapping `(begin, end)` pairs in path order.
/// Call [`reset`](Self::reset) before starting a new run.
#[derive(Clone, Debug, Default)]
pub struct WorkAccumulator<F: Float> {
    work: F,
    length: F,
    plot_points: AllocVec<Vec2<F>>,
    rectangles: AllocVec<WorkRectangle<F>>,
}

impl<F: Float> WorkAccumulator<F> {
    pub fn new() -> Self {
        WorkAccumulator {
            work: F::zero(),
            length: F::zero(),
            plot_points: AllocVec::new(),
            rectangles: AllocVec::new(),
        }
    }

    /// Partition one segment and add it to the totals.
    ///
    /// The returned rectangle sits at the arc length reached before this
    /// segment, so successive rectangles tile the plot without gaps.
    pub fn push<Fld>(&mut self, begin: Vec2<F>, end: Vec2<F>, field: &Fld) -> Result<WorkSample<F>, FieldError>
    where
        Fld: ForceField<F> + ?Sized,
    {
        let (sample, rect) = partition(begin, end, field)?;
        self.rectangles.push(rect.anchored_at(self.length));
        self.work = self.work + sample.work;
        self.length = self.length + sample.width;
        self.plot_points.push(Vec2::new(self.length, self.work));
        Ok(sample)
    }

    pub fn reset(&mut self) {
        self.work = F::zero();
        self.length = F::zero();
        self.plot_points.clear();
        self.rectangles.clear();
    }

    pub fn total_work(&self) -> F { self.work }
    pub fn total_length(&self) -> F { self.length }
    pub fn steps(&self) -> usize { self.rectangles.len() }

    /// `(accumulated length, accumulated work)` after each segment.
    pub fn plot_points(&self) -> &[Vec2<F>] { &self.plot_points }

    pub fn rectangles(&self) -> &[WorkRectangle<F>] { &self.rectangles }

    pub fn into_summary(self) -> RunSummary<F> {
        RunSummary {
            total_work: self.work,
            total_length: self.length,
            plot_points: self.plot_points,
            rectangles: self.rectangles,
        }
    }
}

/// Result of [`integrate_along`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary<F: Float> {
    /// Approximates the line integral of the field over the traversed arc.
    pub total_work: F,
    /// Approximates the traversed arc length.
    pub total_length: F,
    pub plot_points: AllocVec<Vec2<F>>,
    pub rectangles: AllocVec<WorkRectangle<F>>,
}

/// Partition the arc of `path` from `start_angle` through
/// `start_angle + sweep` into `steps` equal pieces and accumulate the work.
///
/// ```
/// use fieldwork::{integrate_along, CirclePath, FieldKind};
/// use core::f64::consts::PI;
///
/// let path = CirclePath::centered(2.0).unwrap();
/// let run = integrate_along(&path, &FieldKind::Assigned, 150, 0.0, 2.0 * PI).unwrap();
/// assert!((run.total_length - path.circumference()).abs() < 1e-2);
/// ```
pub fn integrate_along<F, Fld>(
    path: &CirclePath<F>,
    field: &Fld,
    steps: usize,
    start_angle: F,
    sweep: F,
) -> Result<RunSummary<F>, FieldError>
where
    F: Float,
    Fld: ForceField<F> + ?Sized,
{
    if steps == 0 {
        return Err(FieldError::InvalidStepCount);
    }

    let mut acc = WorkAccumulator::new();
    let mut samples = path.samples(steps, start_angle, sweep);
    let mut begin = samples.next().ok_or(FieldError::InvalidStepCount)?;
    for end in samples {
        acc.push(begin, end, field)?;
        begin = end;
    }

    tracing::debug!(
        steps,
        work = %acc.total_work(),
        length = %acc.total_length(),
        "partitioned run complete"
    );
    Ok(acc.into_summary())
}
