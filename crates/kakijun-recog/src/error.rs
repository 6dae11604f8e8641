//! Error types for kakijun-recog

use thiserror::Error;

/// Errors that can occur during comparison and lookup
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecogError {
    /// Core library error (malformed strokes, empty drawings)
    #[error("core error: {0}")]
    Core(#[from] kakijun_core::Error),

    /// A drawing to compare has no strokes
    #[error("drawing has no strokes")]
    EmptyDrawing,

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Point sets or drawings that must correspond do not
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
