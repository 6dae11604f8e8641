//! Error types for kakijun-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Malformed pen input is rejected here, at the resampler boundary, so
//! that later stages only ever see well-formed strokes.

use thiserror::Error;

/// kakijun error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed stroke: odd-length flat coordinate list, or fewer than
    /// two points
    #[error("invalid stroke: {0}")]
    InvalidStroke(String),

    /// A drawing with zero strokes where at least one is required
    #[error("drawing has no strokes")]
    EmptyDrawing,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for kakijun operations
pub type Result<T> = std::result::Result<T, Error>;
