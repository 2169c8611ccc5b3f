//! Built-in demo scenes.
//!
//! Every preset comes with a camera ray that looks at the middle of the
//! scene from the -Z side; the driver orbits that ray about the Y axis.

use clap::ValueEnum;
use render::Scene;
use sdf::{
    BoxShape, BulbFractal, Capsule, ColorSource, Cylinder, JuliaFractal, MathError, Plane, Ray,
    Rgb, Sphere, Surface, Terrain, Torus, Vec3,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenePreset {
    /// Union, intersection and difference of sphere pairs over a floor.
    Csg,
    /// One of each closed-form primitive over a floor.
    Primitives,
    /// Bulb and Julia fractals above procedural terrain.
    Fractals,
}

fn sphere_pair(center: Vec3) -> (Sphere, Sphere) {
    let offset = Vec3::new(0.6, 0.0, 0.3);
    (
        Sphere::new(center - offset, 1.2).with_color(Rgb::RED),
        Sphere::new(center + offset, 1.2).with_color(Rgb::BLUE),
    )
}

fn floor(color: ColorSource) -> Result<Plane, MathError> {
    Ok(Plane::new(Vec3::new(0.0, -1.5, 0.0), Vec3::Y)?.with_color_source(color))
}

impl ScenePreset {
    /// # Errors
    ///
    /// Only fails if a hard-coded plane normal is degenerate.
    pub fn build(self, floor_color: ColorSource) -> Result<Scene, MathError> {
        let mut scene = Scene::new();
        match self {
            Self::Csg => {
                let (a, b) = sphere_pair(Vec3::new(-4.0, 0.0, 0.0));
                scene.push(Surface::union(a, b));
                let (a, b) = sphere_pair(Vec3::ZERO);
                scene.push(Surface::intersection(a, b));
                let (a, b) = sphere_pair(Vec3::new(4.0, 0.0, 0.0));
                scene.push(Surface::difference(a, b));
                scene.push(floor(floor_color)?);
            }
            Self::Primitives => {
                scene.push(Sphere::new(Vec3::new(-6.0, 0.0, 0.0), 1.0).with_color(Rgb::RED));
                scene.push(
                    BoxShape::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(0.8, 1.0, 0.8))
                        .with_color(Rgb::MAGENTA),
                );
                scene.push(Cylinder::new(Vec3::ZERO, 0.8, 1.2).with_color(Rgb::CYAN));
                scene.push(
                    Capsule::new(Vec3::new(3.0, -0.8, 0.0), Vec3::new(3.0, 1.0, 0.0), 0.5)
                        .with_color(Rgb::GREEN),
                );
                scene.push(Torus::new(Vec3::new(6.0, 0.0, 0.0), 1.0, 0.35).with_color(Rgb::YELLOW));
                scene.push(floor(floor_color)?);
            }
            Self::Fractals => {
                scene.push(BulbFractal::new(Vec3::new(-2.5, 4.5, 0.0)).with_scale(1.2));
                scene.push(
                    JuliaFractal::new(Vec3::new(2.5, 4.5, 0.0), Vec3::new(-0.2, 0.6, 0.2))
                        .with_scale(1.2),
                );
                scene.push(
                    Terrain::new(Vec3::ZERO, 1.5, 0.15, 7)
                        .with_warp(2.0)
                        .with_color_source(floor_color),
                );
            }
        }
        Ok(scene)
    }

    /// Initial camera ray for the preset.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in presets.
    pub fn camera(self) -> Result<Ray, MathError> {
        let (origin, target) = match self {
            Self::Csg => (Vec3::new(0.0, 2.0, -12.0), Vec3::ZERO),
            Self::Primitives => (Vec3::new(0.0, 3.0, -14.0), Vec3::ZERO),
            Self::Fractals => (Vec3::new(0.0, 7.0, -12.0), Vec3::new(0.0, 3.5, 0.0)),
        };
        Ray::new(origin, target - origin)
    }
}
