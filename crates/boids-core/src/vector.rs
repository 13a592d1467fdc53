//! Two-dimensional vector type for positions, velocities, and steering forces.
//!
//! `Vec2` is a `Copy` value type: every operation returns a new vector and no
//! vector is ever shared mutably between the force pass and the integrator.
//!
//! # Degenerate inputs
//!
//! Zero-magnitude vectors have no direction.  Rather than letting a division
//! by zero leak NaN into the whole flock, the direction-dependent operations
//! resolve them locally:
//!
//! | Operation                          | Zero-magnitude input returns      |
//! |------------------------------------|-----------------------------------|
//! | [`Vec2::unit`]                     | `Vec2::ZERO`                      |
//! | [`Vec2::clamp_magnitude`] (`min>0`)| `Vec2::ZERO`                      |
//! | [`Vec2::angle_between`]            | `0.0`                             |

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2-D vector stored as double-precision floats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Screen "up" in the flock's frame; the reference for heading rotation.
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `Vec2::ZERO` for a zero vector.
    pub fn unit(self) -> Vec2 {
        let m = self.magnitude();
        if m == 0.0 {
            return Vec2::ZERO;
        }
        self.scale(1.0 / m)
    }

    /// Unsigned angle between `self` and `other`, in `[0, π]`.
    ///
    /// The normalised dot product is clamped to `[-1, 1]` before `acos` so
    /// rounding overshoot on (anti-)parallel vectors cannot yield NaN.  If
    /// either vector is zero the angle is undefined and `0.0` is returned.
    pub fn angle_between(self, other: Vec2) -> f64 {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Rescale so the magnitude lies in `[min, max]`, preserving direction.
    ///
    /// Vectors already inside the band are returned unchanged.  A zero vector
    /// below a nonzero `min` has no direction to stretch along and comes back
    /// as `Vec2::ZERO`.
    pub fn clamp_magnitude(self, min: f64, max: f64) -> Vec2 {
        let m = self.magnitude();
        if m > max {
            self.scale(max / m)
        } else if m < min {
            if m == 0.0 {
                return Vec2::ZERO;
            }
            self.scale(min / m)
        } else {
            self
        }
    }

    /// Signed rotation (radians) that turns [`Vec2::UP`] onto this heading.
    ///
    /// Positive values rotate counter-clockwise.  Renderers use this to orient
    /// an agent's triangle along its velocity.
    pub fn heading_rotation(self) -> f64 {
        let angle = self.angle_between(Vec2::UP);
        if self.x == 0.0 {
            angle
        } else {
            -angle * self.x.signum()
        }
    }

    /// Arithmetic mean of `samples`; `Vec2::ZERO` when there are none.
    pub fn mean(samples: &[Vec2]) -> Vec2 {
        match samples.len() {
            0 => Vec2::ZERO,
            1 => samples[0],
            n => samples.iter().copied().sum::<Vec2>().scale(1.0 / n as f64),
        }
    }

    /// `true` when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, k: f64) -> Vec2 {
        self.scale(k)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Vec2::add)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
