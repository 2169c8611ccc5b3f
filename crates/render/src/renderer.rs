//! # Frame renderer
//!
//! Each frame the renderer builds a [`CameraBasis`] from the camera ray,
//! normalizes the light once, and shades every pixel by sphere tracing.
//!
//! ## Key Components
//!
//! -   **Partitioning:** the pixel buffer is split into contiguous row
//!     ranges with `par_chunks_mut`, one range per worker. Ranges are
//!     disjoint, so workers write without any locking.
//! -   **Fault propagation:** a worker stops its range at the first error
//!     and the error is carried to the join point by `try_reduce`.
//! -   **Determinism:** shading a pixel depends only on its coordinates, so
//!     [`Renderer::render`] and [`Renderer::render_serial`] produce
//!     byte-identical frames.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use rayon::prelude::*;
use sdf::{Ray, Rgb, Vec3};
use tracing::{debug, trace as trace_log};

use crate::camera::CameraBasis;
use crate::config::RenderConfig;
use crate::error::{RenderError, TraceError};
use crate::frame::FrameBuffer;
use crate::scene::Scene;
use crate::tracer::{trace, TraceOutcome};

/// Lower bound on the default worker count.
pub const MIN_WORKERS: usize = 4;

/// Worker threads for `config`: the explicit count if set, otherwise the
/// available parallelism but never fewer than [`MIN_WORKERS`].
#[must_use]
pub fn worker_count(config: &RenderConfig) -> usize {
    match config.workers {
        Some(workers) => workers.max(1),
        None => thread::available_parallelism()
            .map_or(MIN_WORKERS, NonZeroUsize::get)
            .max(MIN_WORKERS),
    }
}

/// Everything a worker needs to shade its rows. Shared read-only.
struct RowTask<'a> {
    basis: CameraBasis,
    light: Vec3,
    scene: &'a Scene,
    config: &'a RenderConfig,
}

impl RowTask<'_> {
    fn shade(&self, x: u32, y: u32) -> Result<(Rgb, bool), RenderError> {
        let config = self.config;
        let direction = self
            .basis
            .pixel_dir(x, y, config.width, config.height, config.fov)?;
        let ray = Ray::new(self.basis.origin, direction)?;
        match trace(self.scene, &ray, &config.trace)? {
            TraceOutcome::Hit(hit) => {
                let normal = hit.surface.normal(hit.point)?;
                let brightness = (normal.dot(self.light) + config.ambient).clamp(0.0, 1.0);
                Ok((hit.surface.color(hit.point).scaled(brightness), true))
            }
            TraceOutcome::Miss { .. } => Ok((config.background, false)),
        }
    }

    /// Shades `rows`, a whole number of image rows starting at `first_row`.
    /// Returns the number of pixels that hit a surface.
    #[allow(clippy::cast_possible_truncation)]
    fn run(&self, first_row: usize, rows: &mut [Rgb]) -> Result<u64, RenderError> {
        let width = self.config.width as usize;
        let mut hits = 0;
        for (offset, row) in rows.chunks_mut(width).enumerate() {
            // Row and column indices fit in u32 because the dimensions do.
            let y = (first_row + offset) as u32;
            for (x, pixel) in row.iter_mut().enumerate() {
                let (color, hit) = self.shade(x as u32, y)?;
                *pixel = color;
                hits += u64::from(hit);
            }
        }
        trace_log!(first_row, rows = rows.len() / width.max(1), hits, "row range done");
        Ok(hits)
    }
}

/// CPU frame renderer owning its worker pool and output buffer.
pub struct Renderer {
    config: RenderConfig,
    pool: rayon::ThreadPool,
    frame: FrameBuffer,
}

impl Renderer {
    /// # Errors
    ///
    /// Returns [`RenderError::ThreadPool`] if the worker threads cannot be
    /// spawned.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        let workers = worker_count(&config);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("render-worker-{i}"))
            .build()?;
        debug!(workers, width = config.width, height = config.height, "renderer ready");
        let frame = FrameBuffer::new(config.width, config.height);
        Ok(Self {
            config,
            pool,
            frame,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Changes the output size. The buffer is reallocated before the next
    /// frame only if the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        if self.frame.resize(width, height) {
            debug!(width, height, "frame buffer reallocated");
        }
    }

    fn prepare<'a>(
        config: &'a RenderConfig,
        scene: &'a Scene,
        camera: &Ray,
    ) -> Result<RowTask<'a>, RenderError> {
        if scene.is_empty() {
            return Err(TraceError::EmptyScene.into());
        }
        Ok(RowTask {
            basis: CameraBasis::from_ray(camera, config.up_hint)?,
            light: config.light.normalized()?,
            scene,
            config,
        })
    }

    /// Renders one frame on the worker pool and blocks until every row range
    /// is done.
    ///
    /// # Errors
    ///
    /// Returns the first fault any worker hit: an empty scene, or a
    /// degenerate vector in the camera, light or a surface normal. The buffer
    /// contents are unspecified after an error.
    pub fn render(&mut self, scene: &Scene, camera: &Ray) -> Result<&FrameBuffer, RenderError> {
        let Self {
            config,
            pool,
            frame,
        } = self;
        if frame.is_empty() {
            return Ok(frame);
        }
        let task = Self::prepare(config, scene, camera)?;

        let width = config.width as usize;
        let rows_per_task = (config.height as usize).div_ceil(pool.current_num_threads()).max(1);
        let start = Instant::now();
        let hits = pool.install(|| {
            frame
                .pixels_mut()
                .par_chunks_mut(rows_per_task * width)
                .enumerate()
                .map(|(i, rows)| task.run(i * rows_per_task, rows))
                .try_reduce(|| 0, |a, b| Ok(a + b))
        })?;
        debug!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            hits,
            rows_per_task,
            "frame rendered"
        );
        Ok(frame)
    }

    /// Single-threaded reference path, same output as [`Renderer::render`].
    ///
    /// # Errors
    ///
    /// Same as [`Renderer::render`].
    pub fn render_serial(
        &mut self,
        scene: &Scene,
        camera: &Ray,
    ) -> Result<&FrameBuffer, RenderError> {
        let Self { config, frame, .. } = self;
        if frame.is_empty() {
            return Ok(frame);
        }
        let task = Self::prepare(config, scene, camera)?;
        let start = Instant::now();
        let hits = task.run(0, frame.pixels_mut())?;
        debug!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            hits,
            "frame rendered serially"
        );
        Ok(frame)
    }
}
