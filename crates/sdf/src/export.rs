//! Flat `Pod` records describing surfaces, for upload to a GPU storage
//! buffer. The layout is 16-byte aligned field by field so it matches a
//! WGSL/std430 struct of `u32`, `vec4<f32>` and `array<f32, 8>`.

use bytemuck::{Pod, Zeroable};

use crate::surface::Surface;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SurfaceRecord {
    /// [`crate::SurfaceKind`] discriminant.
    pub kind: u32,
    pub _pad: [u32; 3],
    /// `xyz` anchor, `w` extent.
    pub anchor: [f32; 4],
    /// Shape specific parameters. Zero for CSG nodes.
    pub params: [f32; 8],
    /// Linear `rgb` of the base color, `a` is always 1.
    pub color: [f32; 4],
}

#[allow(clippy::cast_possible_truncation)]
fn params_of(surface: &Surface) -> [f32; 8] {
    let mut out = [0.0_f32; 8];
    let values: Vec<f64> = match surface {
        Surface::Sphere(s) => vec![s.radius],
        Surface::Box(s) => vec![s.half_extents.x, s.half_extents.y, s.half_extents.z],
        Surface::Plane(s) => {
            let n = s.normal_vector();
            vec![n.x, n.y, n.z]
        }
        Surface::Cylinder(s) => vec![s.radius, s.half_height],
        Surface::Capsule(s) => vec![s.a.x, s.a.y, s.a.z, s.b.x, s.b.y, s.b.z, s.radius],
        Surface::Torus(s) => vec![s.major_radius(), s.minor_radius()],
        Surface::Bulb(s) => vec![f64::from(s.iterations), s.power, s.bailout, s.scale],
        Surface::Julia(s) => vec![
            f64::from(s.iterations),
            s.bailout,
            s.scale,
            s.constant.x,
            s.constant.y,
            s.constant.z,
        ],
        Surface::Terrain(s) => vec![
            s.amplitude,
            s.frequency,
            f64::from(s.seed),
            f64::from(s.octaves),
            s.lacunarity,
            s.gain,
            s.warp.unwrap_or(0.0),
            if s.ridged { 1.0 } else { 0.0 },
        ],
        Surface::Union(_) | Surface::Intersection(_) | Surface::Difference(_) => Vec::new(),
    };
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value as f32;
    }
    out
}

impl From<&Surface> for SurfaceRecord {
    #[allow(clippy::cast_possible_truncation)]
    fn from(surface: &Surface) -> Self {
        let kind = surface.kind();
        if kind.is_csg() {
            return Self {
                kind: kind as u32,
                ..Self::default()
            };
        }
        let anchor = surface.anchor();
        let [r, g, b] = surface.base_color().to_unit();
        Self {
            kind: kind as u32,
            _pad: [0; 3],
            anchor: [
                anchor.x as f32,
                anchor.y as f32,
                anchor.z as f32,
                surface.extent() as f32,
            ],
            params: params_of(surface),
            color: [r, g, b, 1.0],
        }
    }
}
