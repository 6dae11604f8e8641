//! Fitting raw drawings onto a display canvas.
//!
//! Maps stroke coordinates into `[pad, width - pad] x [pad, height - pad]`,
//! centred in the drawable area. This is the transform a review screen
//! applies before replaying a stored reference drawing on a canvas of a
//! different size than the one it was captured on.

use super::Drawing;
use crate::error::{Error, Result};
use crate::stroke::Stroke;

const FIT_EPS: f64 = 1e-12;

/// Options for [`fit_to_canvas`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitOptions {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Margin kept free on every side (default: 12.0)
    pub pad: f64,
    /// Use one scale for both axes (default: true)
    pub keep_aspect: bool,
    /// Mirror vertically, for canvases whose y axis points up (default: false)
    pub flip_y: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            pad: 12.0,
            keep_aspect: true,
            flip_y: false,
        }
    }
}

impl FitOptions {
    /// Options for a `width` x `height` canvas, other fields at defaults
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the padding
    pub fn with_pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// Set aspect preservation
    pub fn with_keep_aspect(mut self, keep_aspect: bool) -> Self {
        self.keep_aspect = keep_aspect;
        self
    }

    /// Set vertical mirroring
    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// Validate options
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidParameter(
                "width/height must be positive".to_string(),
            ));
        }
        if !self.pad.is_finite() {
            return Err(Error::InvalidParameter("pad must be finite".to_string()));
        }
        Ok(())
    }
}

/// Map a drawing into the padded canvas described by `options`.
///
/// Empty strokes are passed through; a drawing without any points is
/// returned unchanged. When every point coincides the whole drawing is
/// placed at the canvas centre.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for a non-positive canvas size.
pub fn fit_to_canvas(drawing: &Drawing, options: &FitOptions) -> Result<Drawing> {
    options.validate()?;
    let Some((xmin, ymin, xmax, ymax)) = drawing.bounding_box() else {
        return Ok(drawing.clone());
    };
    let (w, h) = (options.width, options.height);
    let (minx, miny) = (xmin as f64, ymin as f64);
    let span_x = xmax as f64 - minx;
    let span_y = ymax as f64 - miny;

    if span_x < FIT_EPS && span_y < FIT_EPS {
        let (cx, cy) = ((w * 0.5) as f32, (h * 0.5) as f32);
        return Ok(drawing
            .iter()
            .map(|s| s.iter().map(|_| (cx, cy)).collect::<Stroke>())
            .collect());
    }

    let inner_w = (w - 2.0 * options.pad).max(1.0);
    let inner_h = (h - 2.0 * options.pad).max(1.0);
    let mut sx = inner_w / span_x.max(FIT_EPS);
    let mut sy = inner_h / span_y.max(FIT_EPS);
    if options.keep_aspect {
        let s = sx.min(sy);
        sx = s;
        sy = s;
    }

    let draw_w = span_x * sx;
    let draw_h = span_y * sy;
    let ox = options.pad + (inner_w - draw_w) * 0.5;
    let oy = options.pad + (inner_h - draw_h) * 0.5;

    Ok(drawing
        .iter()
        .map(|s| {
            s.iter()
                .map(|(x, y)| {
                    let bx = (x as f64 - minx) * sx;
                    let mut by = (y as f64 - miny) * sy;
                    if options.flip_y {
                        by = draw_h - by;
                    }
                    ((bx + ox) as f32, (by + oy) as f32)
                })
                .collect::<Stroke>()
        })
        .collect())
}
