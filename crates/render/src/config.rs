//! Render and tracer settings.
//!
//! Both structs deserialize with `#[serde(default)]`, so a JSON file only
//! needs to name the fields it changes.

use std::f64::consts::FRAC_PI_2;

use sdf::{Rgb, Vec3};
use serde::{Deserialize, Serialize};

/// Termination bounds for the sphere tracer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Distances below this count as on the surface.
    pub hit_epsilon: f64,
    /// Total marched distance after which a ray is a miss.
    pub max_distance: f64,
    pub max_steps: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            hit_epsilon: 0.01,
            max_distance: 200.0,
            max_steps: 64,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Horizontal field of view in radians.
    pub fov: f64,
    /// Direction towards the light. Normalized once per frame.
    pub light: Vec3,
    /// Added to the diffuse term before clamping to `[0, 1]`.
    pub ambient: f64,
    pub background: Rgb,
    pub up_hint: Vec3,
    /// Worker threads; `None` uses the available parallelism with a floor of 4.
    pub workers: Option<usize>,
    pub trace: TraceConfig,
}

impl RenderConfig {
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov: FRAC_PI_2,
            light: Vec3::new(-2.0, 1.0, -5.0) / 30.0_f64.sqrt(),
            ambient: 0.3,
            background: Rgb::new(50, 50, 50),
            up_hint: Vec3::Y,
            workers: None,
            trace: TraceConfig::default(),
        }
    }
}
