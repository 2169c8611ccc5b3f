//! Quaternions for rotating vectors and rays.
//!
//! A rotation is a unit quaternion built with [`Quaternion::from_axis_angle`].
//! The general operations (addition, scaling, inverse of a non-unit
//! quaternion) are kept because composing and re-normalizing rotations needs
//! them.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vec3::Vec3;

/// Scalar part `w` plus vector part `v`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub v: Vec3,
}

/// Rotations are unit quaternions.
pub type Rotation = Quaternion;

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self { w: 1.0, v: Vec3::ZERO };

    #[must_use]
    pub const fn new(w: f64, v: Vec3) -> Self {
        Self { w, v }
    }

    /// Embeds a vector as a pure quaternion (`w = 0`).
    #[must_use]
    pub const fn pure(v: Vec3) -> Self {
        Self { w: 0.0, v }
    }

    /// Rotation of `angle` radians about `axis`: `(cos(θ/2), sin(θ/2)·axis)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if `axis` has zero length.
    pub fn from_axis_angle(angle: f64, axis: Vec3) -> Result<Self, MathError> {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Ok(Self::new(cos, axis.normalized()? * sin))
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.w * self.w + self.v.length_squared()).sqrt()
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] for the zero quaternion.
    pub fn normalized(self) -> Result<Self, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self / magnitude)
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.v)
    }

    /// Conjugate divided by the squared magnitude. For a unit quaternion this
    /// is exactly the conjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] for the zero quaternion.
    pub fn inverse(self) -> Result<Self, MathError> {
        let norm_sq = self.w * self.w + self.v.length_squared();
        if norm_sq == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.conjugate() / norm_sq)
    }

    /// Rotates `v` by conjugation and returns the vector part of `q * v * q^-1`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] for the zero quaternion.
    pub fn rotate(self, v: Vec3) -> Result<Vec3, MathError> {
        Ok((self * v * self.inverse()?).v)
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.v + rhs.v)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.v - rhs.v)
    }
}

/// Hamilton product. Associative, not commutative: `a * b` applies `b` first.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.v.dot(rhs.v),
            rhs.v * self.w + self.v * rhs.w + self.v.cross(rhs.v),
        )
    }
}

/// Product with a pure quaternion `(0, v)`.
impl Mul<Vec3> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Vec3) -> Self {
        Self::new(-self.v.dot(rhs), rhs * self.w + self.v.cross(rhs))
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.w * rhs, self.v * rhs)
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.w / rhs, self.v / rhs)
    }
}
