//! Image textures for floor colors.
//!
//! Textures are loaded once through the shared [`AssetCache`]; the color
//! function only samples the decoded image and never touches the disk.

use std::sync::Arc;

use image::RgbImage;
use render::{AssetCache, AssetKey, TextureLoader};
use sdf::{ColorSource, Rgb, Vec3};

/// Decodes image files from disk.
pub struct ImageLoader;

impl TextureLoader<RgbImage> for ImageLoader {
    type Error = image::ImageError;

    fn load(&self, key: &AssetKey) -> Result<RgbImage, image::ImageError> {
        Ok(image::open(key.as_str())?.to_rgb8())
    }
}

/// Tiles `texture` over the XZ plane, one texel per `texel_size` world units.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn planar(texture: Arc<RgbImage>, texel_size: f64) -> ColorSource {
    ColorSource::procedural(move |p: Vec3| {
        let (width, height) = texture.dimensions();
        if width == 0 || height == 0 {
            return Rgb::WHITE;
        }
        let u = ((p.x / texel_size).floor() as i64).rem_euclid(i64::from(width));
        let v = ((p.z / texel_size).floor() as i64).rem_euclid(i64::from(height));
        let [r, g, b] = texture.get_pixel(u as u32, v as u32).0;
        Rgb::new(r, g, b)
    })
}

/// Floor color: the texture at `path` when given and loadable, otherwise a
/// checkerboard.
pub fn floor_color(
    cache: &AssetCache<RgbImage>,
    path: Option<&str>,
    texel_size: f64,
) -> ColorSource {
    path.map(AssetKey::from)
        .and_then(|key| cache.get_or_load(&key, &ImageLoader))
        .map_or_else(
            || ColorSource::checker(Rgb::WHITE, Rgb::new(60, 60, 60), 1.0),
            |texture| planar(texture, texel_size),
        )
}
