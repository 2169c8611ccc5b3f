#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! # Signed Distance Fields
//!
//! The geometry layer of the ray marcher. Every renderable shape is a
//! [`Surface`]: a closed set of variants that can answer three questions at
//! any point in space, namely how far away the surface is, which way it faces
//! and what color it has there.
//!
//! ## Key Components
//!
//! -   **Math:** [`Vec3`], [`Quaternion`] and [`Ray`] are small value types
//!     with no side effects. Normalizing a zero vector is reported as
//!     [`MathError::DegenerateVector`] rather than producing NaNs.
//! -   **Primitives:** [`Sphere`], [`BoxShape`], [`Plane`], [`Cylinder`],
//!     [`Capsule`] and [`Torus`] have closed-form distance functions.
//! -   **Fractals:** [`BulbFractal`] and [`JuliaFractal`] are escape-time
//!     distance estimators whose output is clamped into a range the sphere
//!     tracer can always make progress with.
//! -   **Terrain:** [`Terrain`] is a seeded fractal-noise heightfield.
//! -   **CSG:** [`Surface::union`], [`Surface::intersection`] and
//!     [`Surface::difference`] combine two owned surfaces into one.
//! -   **Export:** [`SurfaceRecord`] flattens a surface into a `Pod` record
//!     for an optional GPU backend.
//!
//! Y is the up axis throughout: cylinders and tori are aligned with it and
//! the terrain height is measured along it.
//!
//! ```rust
//! use sdf::{Rgb, Sphere, Surface, Vec3};
//!
//! let a = Sphere::new(Vec3::new(-0.5, 0.0, 0.0), 1.0).with_color(Rgb::RED);
//! let b = Sphere::new(Vec3::new(0.5, 0.0, 0.0), 1.0).with_color(Rgb::BLUE);
//! let lens = Surface::intersection(a, b);
//!
//! assert!(lens.distance(Vec3::ZERO) < 0.0);
//! ```

pub mod color;
pub mod csg;
pub mod error;
pub mod export;
pub mod fractal;
pub mod primitives;
pub mod quaternion;
pub mod ray;
pub mod surface;
pub mod terrain;
pub mod vec3;

pub use color::{ColorSource, Rgb};
pub use csg::Csg;
pub use error::MathError;
pub use export::SurfaceRecord;
pub use fractal::{BulbFractal, JuliaFractal};
pub use primitives::{BoxShape, Capsule, Cylinder, Plane, Sphere, Torus};
pub use quaternion::{Quaternion, Rotation};
pub use ray::Ray;
pub use surface::{Surface, SurfaceKind};
pub use terrain::Terrain;
pub use vec3::Vec3;
