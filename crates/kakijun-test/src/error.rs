//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to read a drawing fixture
    #[error("failed to load drawing '{path}': {message}")]
    DrawingLoad { path: String, message: String },

    /// A fixture line could not be parsed
    #[error("{path}:{line}: {message}")]
    DrawingParse {
        path: String,
        line: usize,
        message: String,
    },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
