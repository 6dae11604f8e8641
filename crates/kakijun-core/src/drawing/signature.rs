//! Chunk-mean signatures.
//!
//! The coarse descriptor of the first recognizer prototype: every stroke
//! reduced to a handful of chunk means, remapped per axis into `[0, 100]`
//! using the raw extents of the drawing. Two signatures of the same shape
//! compare by mean absolute difference.

use super::Drawing;
use crate::error::{Error, Result};
use crate::stroke::{Stroke, chunk_stroke};

/// Default number of chunks per stroke.
pub const DEFAULT_CHUNK_COUNT: usize = 9;

/// Side of the signature frame.
const SIGNATURE_SCALE: f64 = 100.0;

/// Axis spans at or below this collapse to the middle of the frame.
const MIN_SIGNATURE_SPAN: f64 = 1.0;

/// Per-stroke chunk means in a `[0, 100]` frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkSignature {
    strokes: Vec<Stroke>,
    chunk_count: usize,
}

impl ChunkSignature {
    /// Build the signature of a drawing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDrawing`] for a drawing without strokes,
    /// [`Error::InvalidParameter`] for `chunk_count == 0`, and
    /// [`Error::InvalidStroke`] when a stroke has fewer points than chunks.
    pub fn from_drawing(drawing: &Drawing, chunk_count: usize) -> Result<Self> {
        drawing.validate()?;
        let (xmin, ymin, xmax, ymax) = drawing.bounding_box().ok_or(Error::EmptyDrawing)?;
        let xspan = xmax as f64 - xmin as f64;
        let yspan = ymax as f64 - ymin as f64;
        let remap = |v: f32, min: f32, span: f64| -> f32 {
            if span > MIN_SIGNATURE_SPAN {
                ((v as f64 - min as f64) / span * SIGNATURE_SCALE) as f32
            } else {
                (SIGNATURE_SCALE / 2.0) as f32
            }
        };

        let mut strokes = Vec::with_capacity(drawing.stroke_count());
        for stroke in drawing.iter() {
            let chunked = chunk_stroke(stroke, chunk_count)?;
            strokes.push(
                chunked
                    .iter()
                    .map(|(x, y)| (remap(x, xmin, xspan), remap(y, ymin, yspan)))
                    .collect(),
            );
        }
        Ok(Self {
            strokes,
            chunk_count,
        })
    }

    /// Number of strokes.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Chunks per stroke.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Signature strokes (chunk means).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Mean absolute difference over every coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the signatures differ in
    /// stroke count or chunk count.
    pub fn mean_abs_difference(&self, other: &ChunkSignature) -> Result<f64> {
        if self.stroke_count() != other.stroke_count() || self.chunk_count != other.chunk_count {
            return Err(Error::InvalidParameter(format!(
                "signature shapes differ: {}x{} vs {}x{}",
                self.stroke_count(),
                self.chunk_count,
                other.stroke_count(),
                other.chunk_count
            )));
        }
        let mut sum = 0.0f64;
        let mut n = 0usize;
        for (a, b) in self.strokes.iter().zip(&other.strokes) {
            for ((ax, ay), (bx, by)) in a.iter().zip(b.iter()) {
                sum += (ax as f64 - bx as f64).abs() + (ay as f64 - by as f64).abs();
                n += 2;
            }
        }
        // Both signatures are non-empty by construction
        Ok(if n == 0 { 0.0 } else { sum / n as f64 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagonal(offset: f32) -> Drawing {
        let pts: Vec<f32> = (0..10)
            .flat_map(|i| [i as f32 * 10.0 + offset, i as f32 * 5.0 + offset])
            .collect();
        Drawing::from_flat_strokes(&[pts]).unwrap()
    }

    #[test]
    fn test_signature_frame() {
        let sig = ChunkSignature::from_drawing(&make_diagonal(0.0), 2).unwrap();
        assert_eq!(sig.chunk_count(), 2);
        let s = &sig.strokes()[0];
        // Chunks of 5 points: means at index 2 and 7 of a 0..9 ramp
        assert!((s.get_x(0).unwrap() - 200.0 / 9.0).abs() < 1e-4);
        assert!((s.get_x(1).unwrap() - 700.0 / 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_signature_translation_invariant() {
        let a = ChunkSignature::from_drawing(&make_diagonal(0.0), 3).unwrap();
        let b = ChunkSignature::from_drawing(&make_diagonal(250.0), 3).unwrap();
        assert!(a.mean_abs_difference(&b).unwrap() < 1e-4);
    }

    #[test]
    fn test_signature_narrow_axis_is_centered() {
        let d = Drawing::from_flat_strokes(&[vec![0.0, 3.0, 50.0, 3.5, 100.0, 3.0]]).unwrap();
        let sig = ChunkSignature::from_drawing(&d, 3).unwrap();
        assert_eq!(sig.strokes()[0].y_coords(), &[50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_signature_shape_mismatch() {
        let a = ChunkSignature::from_drawing(&make_diagonal(0.0), 3).unwrap();
        let b = ChunkSignature::from_drawing(&make_diagonal(0.0), 2).unwrap();
        assert!(matches!(
            a.mean_abs_difference(&b),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_signature_too_few_points() {
        let d = Drawing::from_flat_strokes(&[vec![0.0, 0.0, 1.0, 1.0]]).unwrap();
        assert!(matches!(
            ChunkSignature::from_drawing(&d, 9),
            Err(Error::InvalidStroke(_))
        ));
    }
}
