#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! # Render
//!
//! Turns a [`Scene`] of [`sdf::Surface`]s and a camera ray into a frame of
//! RGB pixels by sphere tracing every pixel on the CPU.
//!
//! ## Key Components
//!
//! -   **Camera:** [`CameraBasis`] derives an orthonormal frame from the
//!     camera ray and maps pixel coordinates to world-space directions.
//! -   **Tracer:** [`trace`] marches a ray through the scene until it comes
//!     within the hit epsilon of a surface or runs out of distance or steps.
//! -   **Renderer:** [`Renderer`] splits the frame buffer into disjoint row
//!     ranges and shades them on a `rayon` pool. The output is identical to
//!     [`Renderer::render_serial`].
//! -   **Assets:** [`AssetCache`] memoizes externally loaded textures for
//!     color functions; the render path itself never performs I/O.

pub mod assets;
pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod renderer;
pub mod scene;
pub mod tracer;

pub use assets::{AssetCache, AssetKey, TextureLoader};
pub use camera::CameraBasis;
pub use config::{RenderConfig, TraceConfig};
pub use error::{RenderError, TraceError};
pub use frame::FrameBuffer;
pub use renderer::Renderer;
pub use scene::Scene;
pub use tracer::{trace, Hit, TraceOutcome, MISS_DISTANCE};
