//! Force fields acting on a particle in the plane.

use core::fmt;
use core::str::FromStr;

use crate::float::Float;
use crate::vec::Vec2;

/// A pure mapping from position to force.
///
/// Implementations must be free of side effects; the integrator and the
/// partitioner may evaluate a field any number of times per call.
pub trait ForceField<F: Float> {
    /// Force at `position`.
    fn force(&self, position: Vec2<F>) -> Vec2<F>;
}

impl<F: Float, T: ForceField<F> + ?Sized> ForceField<F> for &T {
    fn force(&self, position: Vec2<F>) -> Vec2<F> {
        (**self).force(position)
    }
}

/// The named fields used by the line-integral scenes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FieldKind {
    /// `F(x, y) = x² î + xy ĵ`
    Assigned,
    /// `F(x, y) = (x+1)² î + (x+1)(y+1) ĵ`
    AssignedShift,
    /// `F(x, y) = x² î - xy ĵ`
    Textbook,
}

impl FieldKind {
    /// Every named field, in table order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Assigned, FieldKind::AssignedShift, FieldKind::Textbook];

    /// Lookup key for this field.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Assigned => "assigned",
            FieldKind::AssignedShift => "assigned-shift",
            FieldKind::Textbook => "textbook",
        }
    }
}

impl<F: Float> ForceField<F> for FieldKind {
    fn force(&self, position: Vec2<F>) -> Vec2<F> {
        let Vec2 { x, y } = position;
        match self {
            FieldKind::Assigned => Vec2::new(x * x, x * y),
            FieldKind::AssignedShift => {
                let (sx, sy) = (x + F::one(), y + F::one());
                Vec2::new(sx * sx, sx * sy)
            }
            FieldKind::Textbook => Vec2::new(x * x, -(x * y)),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown force field name")]
pub struct UnknownField;

impl FromStr for FieldKind {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(UnknownField)
    }
}

/// A field exerting no force anywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZeroField;

impl<F: Float> ForceField<F> for ZeroField {
    fn force(&self, _position: Vec2<F>) -> Vec2<F> {
        Vec2::zero()
    }
}

/// Adapts a closure into a [`ForceField`].
///
/// ```
/// use fieldwork::{FieldFn, ForceField, Vec2};
///
/// let radial = FieldFn(|p: Vec2<f64>| p);
/// assert_eq!(radial.force(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FieldFn<G>(pub G);

impl<F: Float, G: Fn(Vec2<F>) -> Vec2<F>> ForceField<F> for FieldFn<G> {
    fn force(&self, position: Vec2<F>) -> Vec2<F> {
        (self.0)(position)
    }
}
