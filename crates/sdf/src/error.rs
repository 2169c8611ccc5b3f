//! Errors raised by the vector math.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A zero-length vector (or zero quaternion) was normalized or inverted.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}
