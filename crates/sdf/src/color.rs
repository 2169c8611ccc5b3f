//! 8-bit colors and per-point color sources.

use std::fmt;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::vec3::Vec3;

/// 8-bit RGB triple, laid out exactly as one pixel of a packed RGB8 image.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiplies each channel by `k`, truncating toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled(self, k: f64) -> Self {
        let channel = |c: u8| (f64::from(c) * k).clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Channels as floats in `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// Pure function from a surface point to its color.
pub type ColorFn = dyn Fn(Vec3) -> Rgb + Send + Sync;

/// Where a surface gets its color from.
///
/// Procedural sources must be pure: evaluating a color never mutates
/// anything, so workers can shade the same surface concurrently.
#[derive(Clone)]
pub enum ColorSource {
    Solid(Rgb),
    Procedural(Arc<ColorFn>),
}

impl ColorSource {
    pub fn procedural(f: impl Fn(Vec3) -> Rgb + Send + Sync + 'static) -> Self {
        Self::Procedural(Arc::new(f))
    }

    /// Alternating `a`/`b` cells of edge `size` on the XZ plane.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn checker(a: Rgb, b: Rgb, size: f64) -> Self {
        Self::procedural(move |p| {
            let cell = (p.x / size).floor() as i64 + (p.z / size).floor() as i64;
            if cell.rem_euclid(2) == 0 {
                a
            } else {
                b
            }
        })
    }

    #[must_use]
    pub fn at(&self, p: Vec3) -> Rgb {
        match self {
            Self::Solid(color) => *color,
            Self::Procedural(f) => f(p),
        }
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        Self::Solid(Rgb::WHITE)
    }
}

impl From<Rgb> for ColorSource {
    fn from(color: Rgb) -> Self {
        Self::Solid(color)
    }
}

impl fmt::Debug for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            Self::Procedural(_) => f.write_str("Procedural(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_truncates_and_saturates() {
        let c = Rgb::new(200, 100, 3);
        assert_eq!(c.scaled(0.5), Rgb::new(100, 50, 1));
        assert_eq!(c.scaled(2.0), Rgb::new(255, 200, 6));
        assert_eq!(c.scaled(-1.0), Rgb::BLACK);
    }

    #[test]
    fn checker_alternates_cells() {
        let checker = ColorSource::checker(Rgb::WHITE, Rgb::BLACK, 1.0);
        assert_eq!(checker.at(Vec3::new(0.5, 0.0, 0.5)), Rgb::WHITE);
        assert_eq!(checker.at(Vec3::new(1.5, 0.0, 0.5)), Rgb::BLACK);
        assert_eq!(checker.at(Vec3::new(-0.5, 0.0, 0.5)), Rgb::BLACK);
        assert_eq!(checker.at(Vec3::new(-0.5, 0.0, -0.5)), Rgb::WHITE);
    }
}
