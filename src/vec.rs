//! Planar vector type used for positions, velocities, and forces.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// 2D vector for positions, velocities, and field values in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Unit vector at `angle` radians from the +x axis.
    pub fn from_angle(angle: F) -> Self { Vec2 { x: angle.cos(), y: angle.sin() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude). Finite for any finite vector, however large.
    pub fn length(self) -> F {
        F::hypot(self.x, self.y)
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Angle from the +x axis, in (-pi, pi].
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    ///
    /// Only an exactly zero length or a non-finite component is rejected;
    /// tiny and huge vectors normalize like any other.
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len == F::zero() || !len.is_finite() {
            None
        } else {
            Some(self.scale(F::one() / len))
        }
    }

    /// True when both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
