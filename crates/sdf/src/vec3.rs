use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::quaternion::Quaternion;

/// A 3-dimensional vector of `f64` components.
///
/// `#[repr(C)]` and `Pod`, so a slice of them can be handed to an exporter
/// without copying.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] when the magnitude is exactly zero.
    pub fn normalized(self) -> Result<Self, MathError> {
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self / length)
    }

    /// In-place variant of [`Vec3::normalized`]. Leaves `self` untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] when the magnitude is exactly zero.
    pub fn normalize(&mut self) -> Result<(), MathError> {
        *self = self.normalized()?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Componentwise maximum against a scalar.
    #[inline]
    #[must_use]
    pub fn max_scalar(self, m: f64) -> Self {
        Self::new(self.x.max(m), self.y.max(m), self.z.max(m))
    }

    #[inline]
    #[must_use]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Rotates the vector by conjugation, `q * v * q^-1`.
    ///
    /// # Errors
    ///
    /// Fails only for the zero quaternion, which has no inverse.
    pub fn rotated(self, q: Quaternion) -> Result<Self, MathError> {
        q.rotate(self)
    }

    /// In-place variant of [`Vec3::rotated`].
    ///
    /// # Errors
    ///
    /// Fails only for the zero quaternion, which has no inverse.
    pub fn rotate(&mut self, q: Quaternion) -> Result<(), MathError> {
        *self = q.rotate(*self)?;
        Ok(())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
