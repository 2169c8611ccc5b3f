//! Tracing and rendering errors.

use sdf::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    #[error("closest-object query on a scene with no surfaces")]
    EmptyScene,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
