//! Closed-form signed distance functions.
//!
//! Each shape is evaluated in object space after translating out its center,
//! so none of them carry an orientation. Normals default to the central
//! finite difference of the distance with [`SMOOTH_NORMAL_EPSILON`]; spheres
//! and planes use their exact normals.

use crate::color::{ColorSource, Rgb};
use crate::error::MathError;
use crate::surface::estimate_normal;
use crate::vec3::Vec3;

/// Finite-difference step for smooth primitives.
pub const SMOOTH_NORMAL_EPSILON: f64 = 1e-5;

macro_rules! color_builders {
    ($shape:ty) => {
        impl $shape {
            #[must_use]
            pub fn with_color(mut self, color: Rgb) -> Self {
                self.color = ColorSource::Solid(color);
                self
            }

            #[must_use]
            pub fn with_color_source(mut self, color: ColorSource) -> Self {
                self.color = color;
                self
            }
        }
    };
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: ColorSource,
}

impl Sphere {
    #[must_use]
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self {
            center,
            radius,
            color: ColorSource::default(),
        }
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        (p - self.center).length() - self.radius
    }

    /// Radial direction; degenerate only at the exact center.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] when `p` is the center.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        (p - self.center).normalized()
    }
}

color_builders!(Sphere);

/// Axis-aligned box. Named `BoxShape` so it does not shadow `std::boxed::Box`.
#[derive(Clone, Debug)]
pub struct BoxShape {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub color: ColorSource,
}

impl BoxShape {
    #[must_use]
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
            color: ColorSource::default(),
        }
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        let q = (p - self.center).abs() - self.half_extents;
        let outside = q.max_scalar(0.0).length();
        let inside = q.max_element().min(0.0);
        outside + inside
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] where the gradient vanishes.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        estimate_normal(p, SMOOTH_NORMAL_EPSILON, |q| self.distance(q))
    }
}

color_builders!(BoxShape);

/// Infinite plane through `point`, facing `normal`.
#[derive(Clone, Debug)]
pub struct Plane {
    pub point: Vec3,
    normal: Vec3,
    pub color: ColorSource,
}

impl Plane {
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if `normal` is zero.
    pub fn new(point: Vec3, normal: Vec3) -> Result<Self, MathError> {
        Ok(Self {
            point,
            normal: normal.normalized()?,
            color: ColorSource::default(),
        })
    }

    #[must_use]
    pub fn normal_vector(&self) -> Vec3 {
        self.normal
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] if `normal` is zero.
    pub fn set_normal(&mut self, normal: Vec3) -> Result<(), MathError> {
        self.normal = normal.normalized()?;
        Ok(())
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        (p - self.point).dot(self.normal)
    }

    #[must_use]
    pub fn normal(&self, _p: Vec3) -> Vec3 {
        self.normal
    }
}

color_builders!(Plane);

/// Capped cylinder along the local Y axis.
#[derive(Clone, Debug)]
pub struct Cylinder {
    pub center: Vec3,
    pub radius: f64,
    pub half_height: f64,
    pub color: ColorSource,
}

impl Cylinder {
    #[must_use]
    pub fn new(center: Vec3, radius: f64, half_height: f64) -> Self {
        Self {
            center,
            radius,
            half_height,
            color: ColorSource::default(),
        }
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        let q = p - self.center;
        let dxz = q.x.hypot(q.z) - self.radius;
        let dy = q.y.abs() - self.half_height;
        let outside = dxz.max(0.0).hypot(dy.max(0.0));
        dxz.max(dy).min(0.0) + outside
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] where the gradient vanishes.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        estimate_normal(p, SMOOTH_NORMAL_EPSILON, |q| self.distance(q))
    }
}

color_builders!(Cylinder);

/// Segment `a`-`b` swept by a sphere of `radius`.
#[derive(Clone, Debug)]
pub struct Capsule {
    pub a: Vec3,
    pub b: Vec3,
    pub radius: f64,
    pub color: ColorSource,
}

impl Capsule {
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, radius: f64) -> Self {
        Self {
            a,
            b,
            radius,
            color: ColorSource::default(),
        }
    }

    /// Distance between the two end points.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).length()
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        let pa = p - self.a;
        let ba = self.b - self.a;
        let len_sq = ba.length_squared();
        // a == b degenerates to a sphere around a
        let h = if len_sq > 0.0 {
            (pa.dot(ba) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (pa - ba * h).length() - self.radius
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] where the gradient vanishes.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        estimate_normal(p, SMOOTH_NORMAL_EPSILON, |q| self.distance(q))
    }
}

color_builders!(Capsule);

/// Torus lying in the XZ plane.
#[derive(Clone, Debug)]
pub struct Torus {
    pub center: Vec3,
    major_radius: f64,
    minor_radius: f64,
    pub color: ColorSource,
}

impl Torus {
    #[must_use]
    pub fn new(center: Vec3, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
            color: ColorSource::default(),
        }
    }

    #[must_use]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    #[must_use]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        let q = p - self.center;
        let xz = q.x.hypot(q.z) - self.major_radius;
        xz.hypot(q.y) - self.minor_radius
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] where the gradient vanishes.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        estimate_normal(p, SMOOTH_NORMAL_EPSILON, |q| self.distance(q))
    }
}

color_builders!(Torus);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sphere_sdf_at_known_points() {
        let s = Sphere::new(Vec3::ZERO, 1.0);
        assert_close(s.distance(Vec3::new(1.0, 0.0, 0.0)), 0.0);
        assert_close(s.distance(Vec3::ZERO), -1.0);
        assert_close(s.distance(Vec3::new(2.0, 0.0, 0.0)), 1.0);
    }

    #[test]
    fn box_sdf_at_center_face_and_corner() {
        let b = BoxShape::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        assert_close(b.distance(Vec3::new(1.0, 0.0, 0.0)), -1.0);
        assert_close(b.distance(Vec3::new(2.0, 0.0, 0.0)), 0.0);
        assert_close(b.distance(Vec3::new(1.0, 2.0, 3.0)), 0.0);
        // diagonal from the (+x, +y, +z) corner
        assert_close(b.distance(Vec3::new(3.0, 3.0, 4.0)), 3.0f64.sqrt());
    }

    #[test]
    fn plane_is_signed_along_normal() {
        let p = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 2.0, 0.0)).unwrap();
        assert_close(p.distance(Vec3::new(5.0, -1.0, 7.0)), 0.0);
        assert_close(p.distance(Vec3::new(0.0, 1.0, 0.0)), 2.0);
        assert_close(p.distance(Vec3::new(0.0, -3.0, 0.0)), -2.0);
        assert_eq!(p.normal(Vec3::new(9.0, 9.0, 9.0)), Vec3::Y);
    }

    #[test]
    fn plane_rejects_zero_normal() {
        assert!(Plane::new(Vec3::ZERO, Vec3::ZERO).is_err());
    }

    #[test]
    fn set_normal_normalizes_and_rejects_zero() {
        let mut p = Plane::new(Vec3::ZERO, Vec3::Y).unwrap();
        p.set_normal(Vec3::new(0.0, 0.0, -3.0)).unwrap();
        assert_eq!(p.normal_vector(), Vec3::new(0.0, 0.0, -1.0));
        assert!(p.set_normal(Vec3::ZERO).is_err());
        assert_eq!(p.normal_vector(), Vec3::new(0.0, 0.0, -1.0));
        assert_close(p.distance(Vec3::new(0.0, 0.0, -2.0)), 2.0);
    }

    #[test]
    fn cylinder_sdf_side_cap_and_inside() {
        let c = Cylinder::new(Vec3::ZERO, 1.0, 2.0);
        assert_close(c.distance(Vec3::new(1.0, 0.0, 0.0)), 0.0);
        assert_close(c.distance(Vec3::new(0.0, 2.0, 0.0)), 0.0);
        assert_close(c.distance(Vec3::new(0.0, 3.0, 0.0)), 1.0);
        assert_close(c.distance(Vec3::ZERO), -1.0);
        assert_close(c.distance(Vec3::new(4.0, 6.0, 0.0)), 5.0);
    }

    #[test]
    fn capsule_sdf_along_segment_and_caps() {
        let c = Capsule::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), 0.5);
        assert_close(c.length(), 2.0);
        assert_close(c.distance(Vec3::new(0.5, 1.0, 0.0)), 0.0);
        assert_close(c.distance(Vec3::new(0.0, 3.0, 0.0)), 0.5);
        assert_close(c.distance(Vec3::new(0.0, -1.5, 0.0)), 1.0);
    }

    #[test]
    fn degenerate_capsule_is_a_sphere() {
        let c = Capsule::new(Vec3::ONE, Vec3::ONE, 1.0);
        assert_close(c.distance(Vec3::new(3.0, 1.0, 1.0)), 1.0);
    }

    #[test]
    fn torus_sdf_on_tube() {
        let t = Torus::new(Vec3::ZERO, 2.0, 0.5);
        assert_close(t.distance(Vec3::new(2.5, 0.0, 0.0)), 0.0);
        assert_close(t.distance(Vec3::new(0.0, 0.0, -1.5)), 0.0);
        assert_close(t.distance(Vec3::new(2.0, 0.0, 0.0)), -0.5);
        assert_close(t.distance(Vec3::ZERO), 1.5);
    }

    #[test]
    fn finite_difference_normals_point_outward() {
        let b = BoxShape::new(Vec3::ZERO, Vec3::ONE);
        let n = b.normal(Vec3::new(1.0, 0.2, 0.3)).unwrap();
        assert!((n - Vec3::X).length() < 1e-6);

        let t = Torus::new(Vec3::ZERO, 2.0, 0.5);
        let n = t.normal(Vec3::new(0.0, 0.5, 2.0)).unwrap();
        assert!((n - Vec3::Y).length() < 1e-4);
    }
}
