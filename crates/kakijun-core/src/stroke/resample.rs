//! Fixed point-count resampling of strokes.
//!
//! Each axis is treated as a 1D signal over a normalized parameter axis
//! `i / (N - 1)` and linearly interpolated at `P` evenly spaced values in
//! `[0, 1]`. The parameter is the point index, not the travelled distance:
//! where the pen moved slowly the output stays denser. Match scores depend
//! on this, so it must not be swapped for arc-length resampling.

use super::Stroke;
use crate::error::{Error, Result};

/// Default number of points per resampled stroke.
pub const DEFAULT_POINT_COUNT: usize = 100;

impl Stroke {
    /// Resample to exactly `npts` points.
    ///
    /// The first and last points of the result equal the first and last
    /// input points, and resampling a stroke that already has `npts`
    /// points returns the same points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStroke`] if the stroke has fewer than two
    /// points, or [`Error::InvalidParameter`] if `npts < 2`.
    pub fn resample(&self, npts: usize) -> Result<Stroke> {
        self.validate()?;
        if npts < 2 {
            return Err(Error::InvalidParameter(format!(
                "resample target must be >= 2 points, got {npts}"
            )));
        }
        let x = interpolate_index_axis(self.x_coords(), npts);
        let y = interpolate_index_axis(self.y_coords(), npts);
        Stroke::from_vecs(x, y)
    }
}

/// Resample a flat alternating `[x0, y0, x1, y1, ...]` stroke.
///
/// Returns the resampled stroke in the same flat form.
///
/// # Errors
///
/// Returns [`Error::InvalidStroke`] for odd-length, empty or single-point
/// input.
pub fn resample_flat(coords: &[f32], npts: usize) -> Result<Vec<f32>> {
    Ok(Stroke::from_flat(coords)?.resample(npts)?.to_flat())
}

/// Sample `values` (at parameters `i / (n - 1)`) at `npts` evenly spaced
/// parameters over `[0, 1]`.
///
/// The target position in source-index units is `j * (n - 1) / (npts - 1)`,
/// computed from integers so that it is exact whenever it lands on a source
/// sample. `values` must hold at least two samples.
fn interpolate_index_axis(values: &[f32], npts: usize) -> Vec<f32> {
    let n = values.len();
    let last = n - 1;
    let span = (npts - 1) as f64;
    let mut out = Vec::with_capacity(npts);
    for j in 0..npts {
        let pos = (j * last) as f64 / span;
        let im = pos.floor() as usize;
        if im >= last {
            out.push(values[last]);
            continue;
        }
        let fract = pos - im as f64;
        if fract == 0.0 {
            out.push(values[im]);
            continue;
        }
        let y0 = values[im] as f64;
        let y1 = values[im + 1] as f64;
        out.push((y0 + fract * (y1 - y0)) as f32);
    }
    out
}
