//! Drawing - an ordered sequence of strokes
//!
//! A drawing is one attempt at writing a character. Stroke order is
//! writing order, and the comparator pairs strokes between two drawings
//! by position in that order.

mod fit;
mod normalize;
mod signature;

pub use fit::{FitOptions, fit_to_canvas};
pub use normalize::{
    DEFAULT_CANVAS_SIZE, DEGENERATE_SPAN, NormalizeOptions, NormalizedDrawing, normalize,
};
pub use signature::{ChunkSignature, DEFAULT_CHUNK_COUNT};

use crate::error::{Error, Result};
use crate::stroke::Stroke;

/// Ordered collection of strokes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    /// Create a new empty Drawing.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Create with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strokes: Vec::with_capacity(capacity),
        }
    }

    /// Create a drawing from already built strokes.
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Create a drawing from flat `[x0, y0, x1, y1, ...]` stroke lists, the
    /// form produced by capture surfaces and stored by the card store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStroke`] if any list is malformed.
    pub fn from_flat_strokes<S: AsRef<[f32]>>(strokes: &[S]) -> Result<Self> {
        let strokes = strokes
            .iter()
            .map(|s| Stroke::from_flat(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { strokes })
    }

    /// Convert back to flat stroke lists.
    pub fn to_flat_strokes(&self) -> Vec<Vec<f32>> {
        self.strokes.iter().map(Stroke::to_flat).collect()
    }

    /// Number of strokes.
    #[inline]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Check if the drawing has no strokes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Get a stroke by index.
    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    /// Add a stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Get all strokes as a slice.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Get total number of points across all strokes.
    pub fn total_points(&self) -> usize {
        self.strokes.iter().map(|s| s.len()).sum()
    }

    /// Flatten into a single point sequence.
    pub fn flatten(&self) -> Stroke {
        self.strokes.iter().flat_map(|s| s.iter()).collect()
    }

    /// Bounding box over all strokes: `(x_min, y_min, x_max, y_max)`.
    ///
    /// Returns `None` if the drawing holds no points.
    pub fn bounding_box(&self) -> Option<(f32, f32, f32, f32)> {
        self.strokes
            .iter()
            .filter_map(Stroke::bounding_box)
            .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
    }

    /// Check that the drawing has at least one stroke and that every
    /// stroke is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDrawing`] or [`Error::InvalidStroke`].
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyDrawing);
        }
        for (i, stroke) in self.strokes.iter().enumerate() {
            stroke.validate().map_err(|e| match e {
                Error::InvalidStroke(msg) => Error::InvalidStroke(format!("stroke {i}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Resample every stroke to `npts` points.
    pub fn resample(&self, npts: usize) -> Result<Drawing> {
        let strokes = self
            .strokes
            .iter()
            .map(|s| s.resample(npts))
            .collect::<Result<Vec<_>>>()?;
        Ok(Drawing { strokes })
    }

    /// Create an iterator over strokes.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }
}

impl FromIterator<Stroke> for Drawing {
    fn from_iter<T: IntoIterator<Item = Stroke>>(iter: T) -> Self {
        Self {
            strokes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}
