//! Camera basis and per-pixel ray directions.

use sdf::{MathError, Ray, Vec3};

/// Orthonormal, right-handed camera frame rebuilt once per frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraBasis {
    pub origin: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Right vector used when `forward` is parallel to the up hint.
fn fallback_right(forward: Vec3) -> Result<Vec3, MathError> {
    let axis = if forward.x.abs() < 0.9 { Vec3::X } else { Vec3::Z };
    forward.cross(axis).normalized()
}

impl CameraBasis {
    /// `forward` need not be normalized and `up_hint` need not be orthogonal
    /// to it.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if `forward` is zero. A
    /// `forward` parallel to `up_hint` is not an error.
    pub fn new(origin: Vec3, forward: Vec3, up_hint: Vec3) -> Result<Self, MathError> {
        let forward = forward.normalized()?;
        let right = match forward.cross(up_hint).normalized() {
            Ok(right) => right,
            Err(_) => fallback_right(forward)?,
        };
        let up = right.cross(forward).normalized()?;
        Ok(Self {
            origin,
            forward,
            right,
            up,
        })
    }

    /// # Errors
    ///
    /// See [`CameraBasis::new`].
    pub fn from_ray(ray: &Ray, up_hint: Vec3) -> Result<Self, MathError> {
        Self::new(ray.origin(), ray.direction(), up_hint)
    }

    /// Unit direction through the center of pixel `(x, y)`, with `y` growing
    /// downwards. `fov` spans the image width.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if the direction collapses,
    /// which only happens for a degenerate `fov`.
    pub fn pixel_dir(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        fov: f64,
    ) -> Result<Vec3, MathError> {
        let (w, h) = (f64::from(width), f64::from(height));
        let aspect = w / h;
        let ndc_x = (f64::from(x) + 0.5) / w * 2.0 - 1.0;
        let ndc_y = (f64::from(y) + 0.5) / h * 2.0 - 1.0;
        let half = (fov * 0.5).tan();
        (self.forward + self.right * (ndc_x * half) - self.up * (ndc_y * half / aspect)).normalized()
    }

    /// # Errors
    ///
    /// See [`CameraBasis::pixel_dir`].
    pub fn pixel_ray(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        fov: f64,
    ) -> Result<Ray, MathError> {
        Ray::new(self.origin, self.pixel_dir(x, y, width, height, fov)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        let basis = CameraBasis::new(Vec3::ZERO, Vec3::new(1.0, 0.5, 2.0), Vec3::Y).unwrap();
        for v in [basis.forward, basis.right, basis.up] {
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
        assert!(basis.forward.dot(basis.right).abs() < 1e-12);
        assert!(basis.forward.dot(basis.up).abs() < 1e-12);
        assert!(basis.right.dot(basis.up).abs() < 1e-12);
        assert!(basis.up.y > 0.0);
    }

    #[test]
    fn forward_along_up_hint_uses_fallback() {
        let basis = CameraBasis::new(Vec3::ZERO, Vec3::new(0.0, -3.0, 0.0), Vec3::Y).unwrap();
        assert!((basis.right.length() - 1.0).abs() < 1e-12);
        assert!(basis.right.dot(basis.forward).abs() < 1e-12);
    }

    #[test]
    fn zero_forward_is_rejected() {
        assert!(CameraBasis::new(Vec3::ZERO, Vec3::ZERO, Vec3::Y).is_err());
    }
}
