#![deny(clippy::all, clippy::pedantic)]
//! # Raymarch
//!
//! Headless driver for the CPU ray marcher. Builds one of the demo scenes,
//! renders a number of frames while orbiting the camera around the vertical
//! axis, logs the frame rate and writes the last frame to a PNG.
//!
//! Settings come from `RenderConfig::default()`, then an optional JSON file
//! (`--config`), then individual command-line flags. Set `RUST_LOG=debug`
//! for per-frame timings from the renderer.

mod scenes;
mod texture;

use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbImage;
use render::{AssetCache, FrameBuffer, RenderConfig, Renderer};
use sdf::{Quaternion, Vec3};
use tracing_subscriber::EnvFilter;

use crate::scenes::ScenePreset;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with render settings; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Horizontal field of view in degrees.
    #[arg(long)]
    fov: Option<f64>,
    /// Frames to render; the camera orbits a little between frames.
    #[arg(long, default_value_t = 1)]
    frames: u32,
    #[arg(long)]
    workers: Option<usize>,
    #[arg(long, default_value = "frame.png")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = ScenePreset::Csg)]
    scene: ScenePreset,
    /// Image tiled over the floor instead of the checkerboard.
    #[arg(long)]
    texture: Option<String>,
}

/// Camera orbit per frame, in radians about +Y.
const ORBIT_STEP: f64 = -PI / 40.0;
/// World units per texel for `--texture`.
const TEXEL_SIZE: f64 = 0.05;

impl Cli {
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => RenderConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fov) = self.fov {
            config.fov = fov.to_radians();
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        Ok(config)
    }
}

fn save_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let image = RgbImage::from_raw(frame.width(), frame.height(), frame.as_bytes().to_vec())
        .context("frame buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.render_config()?;

    let textures = AssetCache::new();
    let floor = texture::floor_color(&textures, cli.texture.as_deref(), TEXEL_SIZE);
    let scene = cli.scene.build(floor).context("building scene")?;
    let mut camera = cli.scene.camera().context("placing camera")?;
    let orbit = Quaternion::from_axis_angle(ORBIT_STEP, Vec3::Y)?;

    tracing::info!(
        "Rendering {} frame(s) of the {:?} scene ({} surfaces) at {}x{}",
        cli.frames,
        cli.scene,
        scene.len(),
        config.width,
        config.height
    );
    let mut renderer = Renderer::new(config)?;
    tracing::info!("Using {} worker threads", renderer.workers());

    for i in 0..cli.frames {
        let start = Instant::now();
        renderer
            .render(&scene, &camera)
            .with_context(|| format!("rendering frame {i}"))?;
        let elapsed = start.elapsed().as_secs_f64();
        tracing::info!("Frame {} done, {:.1} fps", i + 1, 1.0 / elapsed.max(1e-9));

        camera.set_origin(camera.origin().rotated(orbit)?);
        camera.rotate(orbit)?;
    }

    save_png(renderer.frame(), &cli.output)?;
    tracing::info!("Wrote {}", cli.output.display());
    Ok(())
}
