//! Immutable 3D vector value type for positions, directions and offsets.
//!
//! # Design
//! - Components are `f32` and private; a `Vec3` is only built through
//!   validated constructors, so no component is ever NaN
//! - Every operation is pure and returns a new value (`Vec3` is `Copy`)
//! - Fallible operations return [`ArithmeticError`] instead of producing NaN
//!
//! # Usage
//! ```
//! use vmath::Vec3;
//!
//! let a = Vec3::new(1, 2, 3)?;
//! let b = Vec3::new(2.0, 3.0, 4.0)?;
//! assert_eq!(a.dot(b), 20.0);
//! assert_eq!((a + b).to_string(), "(3.0, 5.0, 7.0)");
//! assert!(Vec3::ZERO.norm().is_err());
//! # Ok::<(), vmath::ArithmeticError>(())
//! ```

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::debug;

use crate::error::{ArithmeticError, Axis};

/// A primitive number that can be stored as a vector component.
///
/// Integers and `f64` are converted to the nearest `f32`.
pub trait Component: Copy {
    fn to_f32(self) -> f32;
}

impl Component for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

macro_rules! lossless_component {
    ($($t:ty),*) => {
        $(impl Component for $t {
            #[inline]
            fn to_f32(self) -> f32 {
                f32::from(self)
            }
        })*
    };
}

macro_rules! rounded_component {
    ($($t:ty),*) => {
        $(impl Component for $t {
            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }
        })*
    };
}

lossless_component!(i8, i16, u8, u16);
rounded_component!(f64, i32, i64, i128, isize, u32, u64, u128, usize);

/// Immutable three-component vector. No component is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

#[inline]
fn checked(axis: Axis, value: f32) -> Result<f32, ArithmeticError> {
    if value.is_nan() {
        debug!(%axis, "rejected NaN vector component");
        return Err(ArithmeticError::NanComponent { axis });
    }
    Ok(value)
}

impl Vec3 {
    /// The zero vector `(0, 0, 0)`
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from any primitive numeric components.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::NanComponent`] naming the first NaN component.
    #[inline]
    pub fn new(
        x: impl Component,
        y: impl Component,
        z: impl Component,
    ) -> Result<Self, ArithmeticError> {
        Ok(Vec3 {
            x: checked(Axis::X, x.to_f32())?,
            y: checked(Axis::Y, y.to_f32())?,
            z: checked(Axis::Z, z.to_f32())?,
        })
    }

    /// The zero vector, same as [`Vec3::ZERO`]
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    // Callers must only pass results of arithmetic on valid components.
    #[inline]
    const fn raw(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    #[inline]
    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    #[inline]
    #[must_use]
    pub fn z(self) -> f32 {
        self.z
    }

    /// Euclidean length `sqrt(x² + y² + z²)`
    #[inline]
    #[must_use]
    pub fn mag(self) -> f32 {
        self.sqrd_mag().sqrt()
    }

    /// Squared length, cheaper than [`Vec3::mag`] for comparisons
    #[inline]
    #[must_use]
    pub fn sqrd_mag(self) -> f32 {
        self.dot(self)
    }

    /// Scale to unit length, preserving direction.
    ///
    /// Vectors whose squared length overflows `f32` are rescaled by their
    /// largest component first. Infinite components dominate the direction.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::ZeroLength`] when the magnitude is exactly zero.
    pub fn norm(self) -> Result<Self, ArithmeticError> {
        let mag = self.mag();
        if mag == 0.0 {
            debug!(vector = %self, "cannot normalize zero-length vector");
            return Err(ArithmeticError::ZeroLength);
        }
        if mag.is_finite() {
            return Ok(self.div_by(mag));
        }

        let scaled = if self.is_finite() {
            self.div_by(self.x.abs().max(self.y.abs()).max(self.z.abs()))
        } else {
            let dominant = |c: f32| if c.is_infinite() { c.signum() } else { 0.0 };
            Self::raw(dominant(self.x), dominant(self.y), dominant(self.z))
        };
        Ok(scaled.div_by(scaled.mag()))
    }

    #[inline]
    fn div_by(self, divisor: f32) -> Self {
        Self::raw(self.x / divisor, self.y / divisor, self.z / divisor)
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`
    #[inline]
    #[must_use]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Self::raw(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linear interpolation `self + (other - self) * alpha`.
    ///
    /// `alpha` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Vec3, alpha: f32) -> Vec3 {
        self + (other - self) * alpha
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::raw(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::raw(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Signed zeros follow IEEE-754: (-1.0) * 0.0 == -0.0
impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::raw(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::raw(-self.x, -self.y, -self.z)
    }
}

// `{:?}` on f32 is the shortest round-trip form and always keeps a
// fractional digit: 1.0, 0.125, -0.0
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<[f32; 3]> for Vec3 {
    type Error = ArithmeticError;
    fn try_from([x, y, z]: [f32; 3]) -> Result<Self, Self::Error> {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Vector3<f32> {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl TryFrom<Vector3<f32>> for Vec3 {
    type Error = ArithmeticError;
    fn try_from(v: Vector3<f32>) -> Result<Self, Self::Error> {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
