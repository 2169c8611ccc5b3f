//! Escape-time fractal distance estimators.
//!
//! Both fractals share the same shell: transform the query point into
//! fractal space, iterate until the orbit escapes `bailout` or the iteration
//! cap is hit while accumulating the running derivative `dr`, then estimate
//! the distance as `0.5 * ln(r) * r / dr`.
//!
//! The raw estimate is not trustworthy everywhere (it goes negative inside
//! the set and can overflow near the origin), so every result passes through
//! [`settle`] before it reaches the tracer. The output is always in
//! `[MIN_ESTIMATE, MAX_ESTIMATE]`.

use crate::color::{ColorSource, Rgb};
use crate::error::MathError;
use crate::surface::gradient;
use crate::vec3::Vec3;

/// Finite-difference step for fractal normals.
pub const FRACTAL_NORMAL_EPSILON: f64 = 1e-4;
/// Ceiling for non-finite or runaway estimates.
pub const MAX_ESTIMATE: f64 = 100.0;
/// Reported for points the estimator places inside the set.
pub const INSIDE_ESTIMATE: f64 = 0.0005;
/// Floor for tiny positive estimates.
pub const MIN_ESTIMATE: f64 = 0.0001;
/// Orbits are considered escaped this many bailout radii away from the center.
const BOUNDING_FACTOR: f64 = 3.0;
const MIN_RADIUS: f64 = 1e-10;

/// Clamps a raw distance estimate into the range the tracer can consume.
#[must_use]
pub fn settle(d: f64) -> f64 {
    if !d.is_finite() || d > MAX_ESTIMATE {
        MAX_ESTIMATE
    } else if d < 0.0 {
        INSIDE_ESTIMATE
    } else if d < MIN_ESTIMATE {
        MIN_ESTIMATE
    } else {
        d
    }
}

/// Euclidean estimate for points far outside the orbit's reach, skipping
/// the iteration entirely.
fn bounding_estimate(offset: Vec3, bound: f64) -> Option<f64> {
    let dist = offset.length();
    (dist > bound * BOUNDING_FACTOR).then_some(dist - bound)
}

fn escape_estimate(r: f64, dr: f64, scale: f64) -> f64 {
    let r = r.max(MIN_RADIUS);
    0.5 * r.ln() * r / dr.max(MIN_RADIUS) * scale
}

/// Gradient normal, falling back to the radial direction where the clamped
/// estimate is flat.
fn fractal_normal(p: Vec3, center: Vec3, d: impl Fn(Vec3) -> f64) -> Result<Vec3, MathError> {
    gradient(p, FRACTAL_NORMAL_EPSILON, d)
        .normalized()
        .or_else(|_| (p - center).normalized())
}

/// Power-`n` bulb fractal ("Mandelbulb") evaluated in spherical coordinates.
#[derive(Clone, Debug)]
pub struct BulbFractal {
    pub center: Vec3,
    pub iterations: u32,
    pub power: f64,
    pub bailout: f64,
    pub scale: f64,
    pub color: ColorSource,
}

impl BulbFractal {
    #[must_use]
    pub fn new(center: Vec3) -> Self {
        Self {
            center,
            iterations: 8,
            power: 8.0,
            bailout: 2.0,
            scale: 1.0,
            color: ColorSource::Solid(Rgb::CYAN),
        }
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = ColorSource::Solid(color);
        self
    }

    /// Radius of the sphere the fractal lives in, in world units.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.bailout * self.scale
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        let offset = p - self.center;
        if let Some(d) = bounding_estimate(offset, self.bounding_radius()) {
            return settle(d);
        }

        let c = offset / self.scale;
        let mut z = c;
        let mut dr = 1.0;
        let mut r = 0.0;
        for _ in 0..self.iterations {
            r = z.length();
            if r > self.bailout {
                break;
            }
            let rs = r.max(MIN_RADIUS);
            let theta = (z.z / rs).clamp(-1.0, 1.0).acos() * self.power;
            let phi = z.y.atan2(z.x) * self.power;
            dr = self.power * rs.powf(self.power - 1.0) * dr + 1.0;

            let zr = rs.powf(self.power);
            let (sin_theta, cos_theta) = theta.sin_cos();
            let (sin_phi, cos_phi) = phi.sin_cos();
            z = Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta) * zr + c;
        }

        settle(escape_estimate(r, dr, self.scale))
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] only when both the gradient and
    /// the radial fallback vanish.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        fractal_normal(p, self.center, |q| self.distance(q))
    }
}

/// Julia-style fractal iterating `z = z² + c` with the 3D squaring rule
/// `(x² - y² - z², 2xy, 2xz)`.
#[derive(Clone, Debug)]
pub struct JuliaFractal {
    pub center: Vec3,
    pub constant: Vec3,
    pub iterations: u32,
    pub bailout: f64,
    pub scale: f64,
    pub color: ColorSource,
}

impl JuliaFractal {
    #[must_use]
    pub fn new(center: Vec3, constant: Vec3) -> Self {
        Self {
            center,
            constant,
            iterations: 8,
            bailout: 2.0,
            scale: 1.0,
            color: ColorSource::Solid(Rgb::MAGENTA),
        }
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = ColorSource::Solid(color);
        self
    }

    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.bailout * self.scale
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        let offset = p - self.center;
        if let Some(d) = bounding_estimate(offset, self.bounding_radius()) {
            return settle(d);
        }

        let mut z = offset / self.scale;
        let mut dr = 1.0;
        for _ in 0..self.iterations {
            let mut r = z.length();
            if r > self.bailout {
                break;
            }
            if r < MIN_RADIUS {
                r = MIN_RADIUS;
                z = Vec3::new(MIN_RADIUS, 0.0, 0.0);
            }
            let squared = Vec3::new(
                z.x * z.x - z.y * z.y - z.z * z.z,
                2.0 * z.x * z.y,
                2.0 * z.x * z.z,
            );
            z = squared + self.constant;
            dr = 2.0 * r * dr + 1.0;
        }

        settle(escape_estimate(z.length(), dr, self.scale))
    }

    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] only when both the gradient and
    /// the radial fallback vanish.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        fractal_normal(p, self.center, |q| self.distance(q))
    }
}
