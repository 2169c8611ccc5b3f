//! Procedural heightfield terrain.
//!
//! The height is a sum of octaves of seeded 2D value noise (FBM). The lattice
//! values come from a stateless integer hash of `(cell, seed)`, so the same
//! inputs always give bit-identical heights and nothing global is mutated.
//!
//! The surface is `d(p) = p.y - height(p.x, p.z)`. That is not an exact
//! distance on steep slopes, but it is close enough for sphere tracing at
//! the amplitudes the terrain is used with.

use crate::color::{ColorSource, Rgb};
use crate::error::MathError;
use crate::vec3::Vec3;

/// Finite-difference step for the height derivative.
pub const TERRAIN_NORMAL_EPSILON: f64 = 1e-3;
pub const MAX_OCTAVES: u32 = 8;

const WARP_SALT_X: u32 = 0x68E3_1DA4;
const WARP_SALT_Z: u32 = 0xB529_7A4D;
const OCTAVE_SALT: u32 = 0x9E37_79B9;

/// SplitMix64 finalizer over the lattice cell and seed, mapped to `[0, 1)`.
#[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn hash_cell(ix: i64, iz: i64, seed: u32) -> f64 {
    let mut z = (ix as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (iz as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
        ^ u64::from(seed).wrapping_mul(0x1656_67B1_9E37_79F9);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Bilinearly interpolated value noise in `[0, 1)`.
#[allow(clippy::cast_possible_truncation)]
fn value_noise(x: f64, z: f64, seed: u32) -> f64 {
    let (x0, z0) = (x.floor(), z.floor());
    let (ix, iz) = (x0 as i64, z0 as i64);
    let tx = smoothstep(x - x0);
    let tz = smoothstep(z - z0);

    let v00 = hash_cell(ix, iz, seed);
    let v10 = hash_cell(ix + 1, iz, seed);
    let v01 = hash_cell(ix, iz + 1, seed);
    let v11 = hash_cell(ix + 1, iz + 1, seed);

    let a = v00 + (v10 - v00) * tx;
    let b = v01 + (v11 - v01) * tx;
    a + (b - a) * tz
}

#[derive(Clone, Debug)]
pub struct Terrain {
    /// Horizontal origin of the noise domain; only `x` and `z` are used.
    pub origin: Vec3,
    pub amplitude: f64,
    pub frequency: f64,
    pub seed: u32,
    pub octaves: u32,
    pub lacunarity: f64,
    pub gain: f64,
    /// Domain warp strength. `None` and `Some(0.0)` both disable warping.
    pub warp: Option<f64>,
    pub ridged: bool,
    pub color: ColorSource,
}

impl Terrain {
    #[must_use]
    pub fn new(origin: Vec3, amplitude: f64, frequency: f64, seed: u32) -> Self {
        Self {
            origin,
            amplitude,
            frequency,
            seed,
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
            warp: None,
            ridged: false,
            color: ColorSource::Solid(Rgb::new(180, 170, 160)),
        }
    }

    #[must_use]
    pub fn with_octaves(mut self, octaves: u32, lacunarity: f64, gain: f64) -> Self {
        self.octaves = octaves;
        self.lacunarity = lacunarity;
        self.gain = gain;
        self
    }

    #[must_use]
    pub fn with_warp(mut self, strength: f64) -> Self {
        self.warp = Some(strength);
        self
    }

    #[must_use]
    pub fn with_ridged(mut self, ridged: bool) -> Self {
        self.ridged = ridged;
        self
    }

    #[must_use]
    pub fn with_color_source(mut self, color: ColorSource) -> Self {
        self.color = color;
        self
    }

    fn fbm(&self, x: f64, z: f64) -> f64 {
        let (mut px, mut pz) = (x, z);
        if let Some(strength) = self.warp.filter(|s| *s > 0.0) {
            let wf = (self.frequency * 0.5).max(0.01);
            let wx = value_noise(x * wf, z * wf, self.seed ^ WARP_SALT_X);
            let wz = value_noise(x * wf, z * wf, self.seed ^ WARP_SALT_Z);
            px += (wx * 2.0 - 1.0) * strength;
            pz += (wz * 2.0 - 1.0) * strength;
        }

        let mut amp = 1.0;
        let mut freq = self.frequency;
        let mut sum = 0.0;
        for octave in 0..self.octaves.clamp(1, MAX_OCTAVES) {
            let seed = self.seed.wrapping_add(octave.wrapping_mul(OCTAVE_SALT));
            let mut n = value_noise(px * freq, pz * freq, seed);
            if self.ridged {
                n = 1.0 - (2.0 * n - 1.0).abs();
            }
            sum += n * amp;
            freq *= self.lacunarity;
            amp *= self.gain;
        }
        sum
    }

    /// Terrain height above `y = 0` at world position `(x, z)`.
    #[must_use]
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        self.amplitude * self.fbm(x - self.origin.x, z - self.origin.z)
    }

    #[must_use]
    pub fn distance(&self, p: Vec3) -> f64 {
        p.y - self.height_at(p.x, p.z)
    }

    /// Normal of `y - h(x, z)`: `(-dh/dx, 1, -dh/dz)`, normalized.
    ///
    /// # Errors
    ///
    /// Never fails in practice since the up component is always 1; the
    /// result is still checked.
    pub fn normal(&self, p: Vec3) -> Result<Vec3, MathError> {
        let e = TERRAIN_NORMAL_EPSILON;
        let dhdx = (self.height_at(p.x + e, p.z) - self.height_at(p.x - e, p.z)) / (2.0 * e);
        let dhdz = (self.height_at(p.x, p.z + e) - self.height_at(p.x, p.z - e)) / (2.0 * e);
        Vec3::new(-dhdx, 1.0, -dhdz).normalized()
    }

    /// `0` on flat ground, approaching `1` on vertical cliffs.
    ///
    /// # Errors
    ///
    /// Propagates [`Terrain::normal`].
    pub fn slope_factor(&self, p: Vec3) -> Result<f64, MathError> {
        Ok(1.0 - self.normal(p)?.y.clamp(0.0, 1.0))
    }
}
