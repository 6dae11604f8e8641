//! Canonical-frame normalization of drawings.
//!
//! A drawing is resampled so every stroke has the same point count, then
//! remapped into the square `[0, S] x [0, S]` using the global extents of
//! the whole drawing per axis. Sharing the extents across strokes keeps the
//! placement of strokes relative to each other, which is part of a
//! character's shape.
//!
//! # Degenerate extents
//!
//! An axis whose span is below [`DEGENERATE_SPAN`] (all points share that
//! coordinate, e.g. a single horizontal bar) is collapsed to `S / 2`
//! instead of being divided by zero. Strokes left without any spread are
//! scored as maximally dissimilar by the comparator.

use super::Drawing;
use crate::error::{Error, Result};
use crate::stroke::{DEFAULT_POINT_COUNT, Stroke};

/// Default side length of the canonical square.
pub const DEFAULT_CANVAS_SIZE: f64 = 100.0;

/// Axis spans below this are treated as zero.
pub const DEGENERATE_SPAN: f64 = 1e-6;

/// Options for normalization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Points per resampled stroke (default: 100)
    pub point_count: usize,

    /// Side length of the target square (default: 100.0)
    pub canvas_size: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl NormalizeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resample point count
    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, canvas_size: f64) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    /// Validate options
    pub fn validate(&self) -> Result<()> {
        if self.point_count < 2 {
            return Err(Error::InvalidParameter(
                "point_count must be >= 2".to_string(),
            ));
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(Error::InvalidParameter(
                "canvas_size must be positive and finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// A drawing in the canonical frame.
///
/// Every stroke has exactly `point_count` points, all within
/// `[0, canvas_size]` on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDrawing {
    strokes: Vec<Stroke>,
    point_count: usize,
    canvas_size: f64,
}

impl NormalizedDrawing {
    /// Remap an already resampled drawing into `[0, canvas_size]^2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDrawing`] for a drawing without strokes,
    /// [`Error::InvalidStroke`] for strokes under two points, and
    /// [`Error::InvalidParameter`] if the strokes differ in point count or
    /// `canvas_size` is not positive.
    pub fn from_resampled(drawing: &Drawing, canvas_size: f64) -> Result<Self> {
        drawing.validate()?;
        if !(canvas_size.is_finite() && canvas_size > 0.0) {
            return Err(Error::InvalidParameter(
                "canvas_size must be positive and finite".to_string(),
            ));
        }
        let point_count = drawing.strokes()[0].len();
        if let Some(i) = drawing.iter().position(|s| s.len() != point_count) {
            return Err(Error::InvalidParameter(format!(
                "stroke {i} has {} points, expected {point_count}; resample first",
                drawing.strokes()[i].len()
            )));
        }

        // validate() guarantees points, so the box exists
        let (xmin, ymin, xmax, ymax) = drawing.bounding_box().ok_or(Error::EmptyDrawing)?;
        let map_x = AxisMap::new(xmin as f64, xmax as f64, canvas_size);
        let map_y = AxisMap::new(ymin as f64, ymax as f64, canvas_size);
        if map_x.is_degenerate() || map_y.is_degenerate() {
            tracing::debug!(
                x_span = xmax - xmin,
                y_span = ymax - ymin,
                "degenerate drawing extent, collapsing axis to center"
            );
        }

        let strokes: Vec<Stroke> = drawing
            .iter()
            .map(|s| {
                s.iter()
                    .map(|(x, y)| (map_x.apply(x), map_y.apply(y)))
                    .collect::<Stroke>()
            })
            .collect();
        Ok(Self {
            strokes,
            point_count,
            canvas_size,
        })
    }

    /// Number of strokes.
    #[inline]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Points per stroke.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Side length of the frame.
    #[inline]
    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    /// Get a stroke by index.
    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    /// Get all strokes as a slice.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Create an iterator over strokes.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Drop the frame information and return a plain drawing.
    pub fn into_drawing(self) -> Drawing {
        Drawing::from_strokes(self.strokes)
    }
}

/// Resample and remap a drawing into the canonical frame.
///
/// # Errors
///
/// Returns [`Error::EmptyDrawing`] for a drawing without strokes and
/// [`Error::InvalidStroke`] for malformed strokes.
pub fn normalize(drawing: &Drawing, options: &NormalizeOptions) -> Result<NormalizedDrawing> {
    options.validate()?;
    drawing.validate()?;
    let resampled = drawing.resample(options.point_count)?;
    NormalizedDrawing::from_resampled(&resampled, options.canvas_size)
}

/// Linear remap of one axis from `[min, max]` to `[0, size]`.
struct AxisMap {
    min: f64,
    span: f64,
    size: f64,
}

impl AxisMap {
    fn new(min: f64, max: f64, size: f64) -> Self {
        Self {
            min,
            span: max - min,
            size,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.span < DEGENERATE_SPAN
    }

    fn apply(&self, v: f32) -> f32 {
        if self.is_degenerate() {
            return (self.size / 2.0) as f32;
        }
        ((v as f64 - self.min) / self.span * self.size) as f32
    }
}
