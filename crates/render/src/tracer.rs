//! Sphere tracing.
//!
//! A ray starts in the marching state and steps forward by the scene's
//! closest distance until that distance drops below the hit epsilon
//! ([`TraceOutcome::Hit`]) or the marched distance or step count runs out
//! ([`TraceOutcome::Miss`]). Every surface's distance is a lower bound on
//! the true distance, so a step never crosses a surface.

use sdf::{Ray, Surface, Vec3};

use crate::config::TraceConfig;
use crate::error::TraceError;
use crate::scene::Scene;

/// Distance reported for a ray that hit nothing.
pub const MISS_DISTANCE: f64 = -1.0;

#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    /// Distance marched from the ray origin.
    pub distance: f64,
    pub point: Vec3,
    pub surface: &'a Surface,
    pub steps: u32,
}

#[derive(Copy, Clone, Debug)]
pub enum TraceOutcome<'a> {
    Hit(Hit<'a>),
    Miss { steps: u32 },
}

impl<'a> TraceOutcome<'a> {
    /// Marched distance on a hit, [`MISS_DISTANCE`] otherwise.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::Hit(hit) => hit.distance,
            Self::Miss { .. } => MISS_DISTANCE,
        }
    }

    #[must_use]
    pub fn hit(&self) -> Option<&Hit<'a>> {
        match self {
            Self::Hit(hit) => Some(hit),
            Self::Miss { .. } => None,
        }
    }

    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        match self {
            Self::Hit(hit) => hit.steps,
            Self::Miss { steps } => *steps,
        }
    }
}

/// Marches `ray` through `scene`.
///
/// # Errors
///
/// Returns [`TraceError::EmptyScene`] if the scene has no surfaces, even when
/// the step budget is zero.
pub fn trace<'a>(
    scene: &'a Scene,
    ray: &Ray,
    config: &TraceConfig,
) -> Result<TraceOutcome<'a>, TraceError> {
    if scene.is_empty() {
        return Err(TraceError::EmptyScene);
    }

    let direction = ray.direction();
    let mut point = ray.origin();
    let mut marched = 0.0;
    for step in 0..config.max_steps {
        let (d, surface) = scene.closest(point)?;
        if d < config.hit_epsilon {
            return Ok(TraceOutcome::Hit(Hit {
                distance: marched,
                point,
                surface,
                steps: step,
            }));
        }
        point += direction * d;
        marched += d;
        if marched > config.max_distance {
            return Ok(TraceOutcome::Miss { steps: step + 1 });
        }
    }
    Ok(TraceOutcome::Miss {
        steps: config.max_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdf::Sphere;

    #[test]
    fn zero_step_budget_is_a_miss() {
        let mut scene = Scene::new();
        scene.push(Sphere::new(Vec3::ZERO, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z).unwrap();
        let config = TraceConfig {
            max_steps: 0,
            ..TraceConfig::default()
        };
        let outcome = trace(&scene, &ray, &config).unwrap();
        assert!(!outcome.is_hit());
        assert_eq!(outcome.distance(), MISS_DISTANCE);
    }

    #[test]
    fn origin_inside_surface_hits_immediately() {
        let mut scene = Scene::new();
        scene.push(Sphere::new(Vec3::ZERO, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        let outcome = trace(&scene, &ray, &TraceConfig::default()).unwrap();
        let hit = outcome.hit().unwrap();
        assert_eq!(hit.steps, 0);
        assert_eq!(hit.distance, 0.0);
    }
}
