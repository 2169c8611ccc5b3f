//! Rays with a direction that is always unit length.

use crate::error::MathError;
use crate::quaternion::Quaternion;
use crate::vec3::Vec3;

/// Origin plus a direction that is kept normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if `direction` is zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, MathError> {
        Ok(Self {
            origin,
            direction: direction.normalized()?,
        })
    }

    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Moves the origin `distance` units along the direction.
    pub fn advance(&mut self, distance: f64) {
        self.origin += self.direction * distance;
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.origin += offset;
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if `direction` is zero; the
    /// ray is left unchanged.
    pub fn set_direction(&mut self, direction: Vec3) -> Result<(), MathError> {
        self.direction = direction.normalized()?;
        Ok(())
    }

    /// Rotates the direction in place; the origin stays put.
    ///
    /// # Errors
    ///
    /// Fails for the zero quaternion.
    pub fn rotate(&mut self, q: Quaternion) -> Result<(), MathError> {
        self.set_direction(q.rotate(self.direction)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)).unwrap();
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert_eq!(Ray::new(Vec3::ZERO, Vec3::ZERO), Err(MathError::DegenerateVector));
    }

    #[test]
    fn advance_moves_along_direction() {
        let mut ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z).unwrap();
        ray.advance(4.0);
        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(ray.at(1.0), Vec3::ZERO);
    }

    #[test]
    fn translate_moves_origin_only() {
        let mut ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 2.0, 0.0)).unwrap();
        ray.translate(Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(ray.origin(), Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(ray.direction(), Vec3::Y);
    }
}
