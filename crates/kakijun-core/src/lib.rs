//! kakijun Core - Stroke and drawing data structures
//!
//! This crate provides the data model and geometric preprocessing used by
//! the kakijun handwriting comparison pipeline:
//!
//! - [`Stroke`] - A single pen-down to pen-up path
//! - [`Drawing`] - An ordered sequence of strokes (one character attempt)
//! - [`NormalizedDrawing`] - A drawing resampled and remapped into the
//!   canonical square frame
//! - [`ChunkSignature`] - Coarse chunk-mean descriptor of a drawing
//!
//! # Pipeline
//!
//! ```
//! use kakijun_core::{Drawing, NormalizeOptions, normalize};
//!
//! let drawing = Drawing::from_flat_strokes(&[
//!     vec![10.0, 50.0, 90.0, 52.0],
//!     vec![50.0, 10.0, 51.0, 90.0],
//! ])
//! .unwrap();
//! let normalized = normalize(&drawing, &NormalizeOptions::default()).unwrap();
//! assert_eq!(normalized.point_count(), 100);
//! ```

pub mod drawing;
pub mod error;
pub mod stroke;

pub use drawing::{
    ChunkSignature, DEFAULT_CANVAS_SIZE, DEFAULT_CHUNK_COUNT, DEGENERATE_SPAN, Drawing,
    FitOptions, NormalizeOptions, NormalizedDrawing, fit_to_canvas, normalize,
};
pub use error::{Error, Result};
pub use stroke::{
    DEFAULT_POINT_COUNT, MIN_STROKE_POINTS, PointIter, Stroke, chunk_stroke, resample_flat,
};
