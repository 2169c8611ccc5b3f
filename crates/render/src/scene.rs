//! Ordered collection of surfaces owned by the scene.
//!
//! The scene is only mutated between frames; while a frame renders it is
//! shared read-only with every worker.

use sdf::{Surface, SurfaceRecord, Vec3};

use crate::error::TraceError;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Swaps in a new set of surfaces and hands back the old one.
    pub fn replace(&mut self, surfaces: Vec<Surface>) -> Vec<Surface> {
        std::mem::replace(&mut self.surfaces, surfaces)
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Surface> {
        self.surfaces.iter()
    }

    /// Smallest signed distance from `p` and the surface it belongs to.
    /// Exact ties go to the surface added first.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::EmptyScene`] if there are no surfaces.
    pub fn closest(&self, p: Vec3) -> Result<(f64, &Surface), TraceError> {
        let mut surfaces = self.surfaces.iter();
        let first = surfaces.next().ok_or(TraceError::EmptyScene)?;
        let mut best = (first.distance(p), first);
        for surface in surfaces {
            let d = surface.distance(p);
            if d < best.0 {
                best = (d, surface);
            }
        }
        Ok(best)
    }

    /// Flat records for every top-level surface, in scene order.
    #[must_use]
    pub fn export(&self) -> Vec<SurfaceRecord> {
        self.surfaces.iter().map(SurfaceRecord::from).collect()
    }
}

impl FromIterator<Surface> for Scene {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        Self {
            surfaces: iter.into_iter().collect(),
        }
    }
}

impl Extend<Surface> for Scene {
    fn extend<I: IntoIterator<Item = Surface>>(&mut self, iter: I) {
        self.surfaces.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Surface;
    type IntoIter = std::slice::Iter<'a, Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
