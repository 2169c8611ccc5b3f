//! Constructive solid geometry over two owned child surfaces.
//!
//! A CSG node owns its children outright; trees are built once and never
//! shared or mutated while a frame is rendered. Nothing is cached: every
//! query re-evaluates both children.

use crate::surface::Surface;
use crate::vec3::Vec3;

/// The two operands of a CSG node.
#[derive(Clone, Debug)]
pub struct Csg {
    pub a: Box<Surface>,
    pub b: Box<Surface>,
}

impl Csg {
    pub fn new(a: impl Into<Surface>, b: impl Into<Surface>) -> Self {
        Self {
            a: Box::new(a.into()),
            b: Box::new(b.into()),
        }
    }

    #[must_use]
    pub fn union_distance(&self, p: Vec3) -> f64 {
        self.a.distance(p).min(self.b.distance(p))
    }

    #[must_use]
    pub fn intersection_distance(&self, p: Vec3) -> f64 {
        self.a.distance(p).max(self.b.distance(p))
    }

    /// `a` with `b` carved out of it.
    #[must_use]
    pub fn difference_distance(&self, p: Vec3) -> f64 {
        self.a.distance(p).max(-self.b.distance(p))
    }

    /// Child that owns the union surface at `p`; `b` on ties.
    #[must_use]
    pub fn nearer(&self, p: Vec3) -> &Surface {
        if self.a.distance(p) < self.b.distance(p) {
            &self.a
        } else {
            &self.b
        }
    }

    /// Child that owns the intersection surface at `p`; `b` on ties.
    #[must_use]
    pub fn farther(&self, p: Vec3) -> &Surface {
        if self.a.distance(p) > self.b.distance(p) {
            &self.a
        } else {
            &self.b
        }
    }
}

impl Surface {
    /// Everything inside either operand.
    pub fn union(a: impl Into<Surface>, b: impl Into<Surface>) -> Self {
        Self::Union(Csg::new(a, b))
    }

    /// Only what is inside both operands.
    pub fn intersection(a: impl Into<Surface>, b: impl Into<Surface>) -> Self {
        Self::Intersection(Csg::new(a, b))
    }

    /// `a` minus `b`. Shading always comes from `a`, including on the cut.
    pub fn difference(a: impl Into<Surface>, b: impl Into<Surface>) -> Self {
        Self::Difference(Csg::new(a, b))
    }
}
