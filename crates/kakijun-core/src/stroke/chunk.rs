//! Chunk-mean reduction of strokes.
//!
//! Used by the coarse signature recognizer: a stroke of `N` points is cut
//! into `chunk_count` consecutive runs of `N / chunk_count` points (the
//! final run absorbs the remainder) and every run collapses to its mean.

use super::Stroke;
use crate::error::{Error, Result};

/// Reduce a stroke to `chunk_count` chunk means.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `chunk_count` is zero and
/// [`Error::InvalidStroke`] if the stroke has fewer points than chunks.
pub fn chunk_stroke(stroke: &Stroke, chunk_count: usize) -> Result<Stroke> {
    if chunk_count == 0 {
        return Err(Error::InvalidParameter(
            "chunk_count must be >= 1".to_string(),
        ));
    }
    let n = stroke.len();
    if n < chunk_count {
        return Err(Error::InvalidStroke(format!(
            "stroke has {n} point(s), fewer than {chunk_count} chunks"
        )));
    }
    let chunk_size = n / chunk_count;
    let xs = stroke.x_coords();
    let ys = stroke.y_coords();
    let mut out = Stroke::with_capacity(chunk_count);
    for c in 0..chunk_count {
        let start = c * chunk_size;
        let end = if c + 1 == chunk_count { n } else { start + chunk_size };
        let len = (end - start) as f64;
        let sx: f64 = xs[start..end].iter().map(|&v| v as f64).sum();
        let sy: f64 = ys[start..end].iter().map(|&v| v as f64).sum();
        out.push((sx / len) as f32, (sy / len) as f32);
    }
    Ok(out)
}
