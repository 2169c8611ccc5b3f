//! # Surface
//!
//! [`Surface`] is the closed set of renderable shapes. Distance, normal and
//! color are each a single exhaustive match, so adding a variant is a compile
//! error everywhere it still needs handling.
//!
//! ## Key Components
//!
//! -   **Dispatch:** [`Surface::distance`], [`Surface::normal`] and
//!     [`Surface::color`] forward to the parameter record of each variant.
//!     CSG variants re-evaluate both children on every query.
//! -   **Metadata:** [`Surface::kind`], [`Surface::anchor`],
//!     [`Surface::extent`] and [`Surface::base_color`] describe a surface
//!     without evaluating it. They feed the exporter and logging only; the
//!     tracer never reads them.
//! -   **Normals:** [`gradient`] and [`estimate_normal`] are the central
//!     finite-difference helpers shared by every shape without a closed-form
//!     normal.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::csg::Csg;
use crate::error::MathError;
use crate::fractal::{BulbFractal, JuliaFractal};
use crate::primitives::{BoxShape, Capsule, Cylinder, Plane, Sphere, Torus};
use crate::terrain::Terrain;
use crate::vec3::Vec3;

/// Central-difference gradient of `d` at `p`, unnormalized.
pub(crate) fn gradient(p: Vec3, eps: f64, d: impl Fn(Vec3) -> f64) -> Vec3 {
    let dx = Vec3::new(eps, 0.0, 0.0);
    let dy = Vec3::new(0.0, eps, 0.0);
    let dz = Vec3::new(0.0, 0.0, eps);
    Vec3::new(
        d(p + dx) - d(p - dx),
        d(p + dy) - d(p - dy),
        d(p + dz) - d(p - dz),
    )
}

/// Normalized [`gradient`].
pub(crate) fn estimate_normal(
    p: Vec3,
    eps: f64,
    d: impl Fn(Vec3) -> f64,
) -> Result<Vec3, MathError> {
    gradient(p, eps, d).normalized()
}

/// Discriminant of a [`Surface`], stable across releases for export.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Sphere = 0,
    Box = 1,
    Plane = 2,
    Cylinder = 3,
    Capsule = 4,
    Torus = 5,
    Bulb = 6,
    Julia = 7,
    Terrain = 8,
    Union = 9,
    Intersection = 10,
    Difference = 11,
}

impl SurfaceKind {
    #[must_use]
    pub fn is_csg(self) -> bool {
        matches!(self, Self::Union | Self::Intersection | Self::Difference)
    }
}

#[derive(Clone, Debug)]
pub enum Surface {
    Sphere(Sphere),
    Box(BoxShape),
    Plane(Plane),
    Cylinder(Cylinder),
    Capsule(Capsule),
    Torus(Torus),
    Bulb(BulbFractal),
    Julia(JuliaFractal),
    Terrain(Terrain),
    Union(Csg),
    Intersection(Csg),
    /// The first operand with the second carved out.
    Difference(Csg),
}

impl Surface {
    /// Signed distance from `p`: negative inside, zero on the boundary.
    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        match self {
            Self::Sphere(s) => s.distance(p),
            Self::Box(s) => s.distance(p),
            Self::Plane(s) => s.distance(p),
            Self::Cylinder(s) => s.distance(p),
            Self::Capsule(s) => s.distance(p),
            Self::Torus(s) => s.distance(p),
            Self::Bulb(s) => s.distance(p),
            Self::Julia(s) => s.distance(p),
            Self::Terrain(s) => s.distance(p),
            Self::Union(c) => c.union_distance(p),
            Self::Intersection(c) => c.intersection_distance(p),
            Self::Difference(c) => c.difference_distance(p),
        }
    }

    /// Unit outward normal at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateVector`] when the normal cannot be
    /// normalized at `p`, e.g. at the exact center of a sphere.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        match self {
            Self::Sphere(s) => s.normal(p),
            Self::Box(s) => s.normal(p),
            Self::Plane(s) => Ok(s.normal(p)),
            Self::Cylinder(s) => s.normal(p),
            Self::Capsule(s) => s.normal(p),
            Self::Torus(s) => s.normal(p),
            Self::Bulb(s) => s.normal(p),
            Self::Julia(s) => s.normal(p),
            Self::Terrain(s) => s.normal(p),
            Self::Union(c) => c.nearer(p).normal(p),
            Self::Intersection(c) => c.farther(p).normal(p),
            Self::Difference(c) => c.a.normal(p),
        }
    }

    #[must_use]
    pub fn color(&self, p: Vec3) -> Rgb {
        match self {
            Self::Sphere(s) => s.color.at(p),
            Self::Box(s) => s.color.at(p),
            Self::Plane(s) => s.color.at(p),
            Self::Cylinder(s) => s.color.at(p),
            Self::Capsule(s) => s.color.at(p),
            Self::Torus(s) => s.color.at(p),
            Self::Bulb(s) => s.color.at(p),
            Self::Julia(s) => s.color.at(p),
            Self::Terrain(s) => s.color.at(p),
            Self::Union(c) => c.nearer(p).color(p),
            Self::Intersection(c) => c.farther(p).color(p),
            Self::Difference(c) => c.a.color(p),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Sphere(_) => SurfaceKind::Sphere,
            Self::Box(_) => SurfaceKind::Box,
            Self::Plane(_) => SurfaceKind::Plane,
            Self::Cylinder(_) => SurfaceKind::Cylinder,
            Self::Capsule(_) => SurfaceKind::Capsule,
            Self::Torus(_) => SurfaceKind::Torus,
            Self::Bulb(_) => SurfaceKind::Bulb,
            Self::Julia(_) => SurfaceKind::Julia,
            Self::Terrain(_) => SurfaceKind::Terrain,
            Self::Union(_) => SurfaceKind::Union,
            Self::Intersection(_) => SurfaceKind::Intersection,
            Self::Difference(_) => SurfaceKind::Difference,
        }
    }

    /// Center, base point or origin of the shape. Zero for CSG nodes.
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        match self {
            Self::Sphere(s) => s.center,
            Self::Box(s) => s.center,
            Self::Plane(s) => s.point,
            Self::Cylinder(s) => s.center,
            Self::Capsule(s) => (s.a + s.b) * 0.5,
            Self::Torus(s) => s.center,
            Self::Bulb(s) => s.center,
            Self::Julia(s) => s.center,
            Self::Terrain(s) => s.origin,
            Self::Union(_) | Self::Intersection(_) | Self::Difference(_) => Vec3::ZERO,
        }
    }

    /// Characteristic size: radius, largest half extent or bounding radius.
    /// Zero for unbounded shapes and CSG nodes.
    #[must_use]
    pub fn extent(&self) -> f64 {
        match self {
            Self::Sphere(s) => s.radius,
            Self::Box(s) => s.half_extents.max_element(),
            Self::Cylinder(s) => s.radius.max(s.half_height),
            Self::Capsule(s) => 0.5 * s.length() + s.radius,
            Self::Torus(s) => s.major_radius() + s.minor_radius(),
            Self::Bulb(s) => s.bounding_radius(),
            Self::Julia(s) => s.bounding_radius(),
            Self::Terrain(s) => s.amplitude,
            Self::Plane(_) | Self::Union(_) | Self::Intersection(_) | Self::Difference(_) => 0.0,
        }
    }

    /// Color at the anchor point. White for CSG nodes.
    #[must_use]
    pub fn base_color(&self) -> Rgb {
        match self {
            Self::Union(_) | Self::Intersection(_) | Self::Difference(_) => Rgb::WHITE,
            other => other.color(other.anchor()),
        }
    }

    /// The two operands of a CSG node.
    #[must_use]
    pub fn children(&self) -> Option<(&Surface, &Surface)> {
        match self {
            Self::Union(c) | Self::Intersection(c) | Self::Difference(c) => Some((&c.a, &c.b)),
            _ => None,
        }
    }
}

macro_rules! surface_from {
    ($($shape:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$shape> for Surface {
                fn from(shape: $shape) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

surface_from! {
    Sphere => Sphere,
    BoxShape => Box,
    Plane => Plane,
    Cylinder => Cylinder,
    Capsule => Capsule,
    Torus => Torus,
    BulbFractal => Bulb,
    JuliaFractal => Julia,
    Terrain => Terrain,
}
