//! Stroke - a single pen-down to pen-up path
//!
//! A stroke is an ordered sequence of 2D points captured while the pen
//! stays on the writing surface. Capture surfaces hand strokes over as a
//! flat alternating `[x0, y0, x1, y1, ...]` list; [`Stroke::from_flat`]
//! validates and converts that form.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y vectors (SoA layout), which is
//! what the resampler wants: it interpolates each axis as an independent
//! 1D signal.

mod chunk;
mod resample;

pub use chunk::chunk_stroke;
pub use resample::{DEFAULT_POINT_COUNT, resample_flat};

use crate::error::{Error, Result};

/// Minimum number of points in a usable stroke.
pub const MIN_STROKE_POINTS: usize = 2;

/// A single stroke.
///
/// Stores 2D points as parallel x/y coordinate vectors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStroke"))]
pub struct Stroke {
    /// X coordinates
    x: Vec<f32>,
    /// Y coordinates
    y: Vec<f32>,
}

/// Unchecked wire form of a [`Stroke`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStroke {
    x: Vec<f32>,
    y: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStroke> for Stroke {
    type Error = Error;

    fn try_from(raw: RawStroke) -> Result<Self> {
        Stroke::from_vecs(raw.x, raw.y)
    }
}

impl Stroke {
    /// Create a new empty Stroke.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Create a Stroke with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Create a Stroke from coordinate vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStroke`] if `x` and `y` have different lengths.
    pub fn from_vecs(x: Vec<f32>, y: Vec<f32>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::InvalidStroke(format!(
                "coordinate vectors differ in length: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { x, y })
    }

    /// Create a Stroke from a flat alternating `[x0, y0, x1, y1, ...]` list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStroke`] if the list is empty, has odd
    /// length, or holds fewer than [`MIN_STROKE_POINTS`] points.
    pub fn from_flat(coords: &[f32]) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::InvalidStroke("empty coordinate list".to_string()));
        }
        if coords.len() % 2 != 0 {
            return Err(Error::InvalidStroke(format!(
                "odd-length coordinate list ({} values)",
                coords.len()
            )));
        }
        let stroke: Stroke = coords.chunks_exact(2).map(|c| (c[0], c[1])).collect();
        stroke.validate()?;
        Ok(stroke)
    }

    /// Create a Stroke from point pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStroke`] if fewer than
    /// [`MIN_STROKE_POINTS`] points are given.
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self> {
        let stroke: Stroke = points.iter().copied().collect();
        stroke.validate()?;
        Ok(stroke)
    }

    /// Check that the stroke has enough points to be compared.
    pub fn validate(&self) -> Result<()> {
        if self.x.len() != self.y.len() {
            return Err(Error::InvalidStroke(format!(
                "coordinate vectors differ in length: {} vs {}",
                self.x.len(),
                self.y.len()
            )));
        }
        if self.len() < MIN_STROKE_POINTS {
            return Err(Error::InvalidStroke(format!(
                "stroke has {} point(s), at least {} required",
                self.len(),
                MIN_STROKE_POINTS
            )));
        }
        Ok(())
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Get X coordinate by index.
    pub fn get_x(&self, index: usize) -> Option<f32> {
        self.x.get(index).copied()
    }

    /// Get Y coordinate by index.
    pub fn get_y(&self, index: usize) -> Option<f32> {
        self.y.get(index).copied()
    }

    /// First point of the stroke (pen-down).
    pub fn first(&self) -> Option<(f32, f32)> {
        self.get(0)
    }

    /// Last point of the stroke (pen-up).
    pub fn last(&self) -> Option<(f32, f32)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Add a point.
    pub fn push(&mut self, x: f32, y: f32) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Set a point at index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    pub fn set(&mut self, index: usize, x: f32, y: f32) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.x[index] = x;
        self.y[index] = y;
        Ok(())
    }

    /// Get X coordinates as a slice.
    pub fn x_coords(&self) -> &[f32] {
        &self.x
    }

    /// Get Y coordinates as a slice.
    pub fn y_coords(&self) -> &[f32] {
        &self.y
    }

    /// Convert back to the flat alternating `[x0, y0, x1, y1, ...]` form.
    pub fn to_flat(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.len() * 2);
        for (x, y) in self.iter() {
            flat.push(x);
            flat.push(y);
        }
        flat
    }

    /// Points widened to `f64`, the precision used for fitting.
    pub fn to_f64_points(&self) -> Vec<(f64, f64)> {
        self.iter().map(|(x, y)| (x as f64, y as f64)).collect()
    }

    /// Compute the bounding box.
    ///
    /// Returns `(x_min, y_min, x_max, y_max)`, or `None` if empty.
    pub fn bounding_box(&self) -> Option<(f32, f32, f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let mut bb = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        for (x, y) in self.iter() {
            bb.0 = bb.0.min(x);
            bb.1 = bb.1.min(y);
            bb.2 = bb.2.max(x);
            bb.3 = bb.3.max(y);
        }
        Some(bb)
    }

    /// Compute the centroid.
    ///
    /// Returns `(cx, cy)`, or `None` if empty.
    pub fn centroid(&self) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let sx: f64 = self.x.iter().map(|&v| v as f64).sum();
        let sy: f64 = self.y.iter().map(|&v| v as f64).sum();
        Some(((sx / n) as f32, (sy / n) as f32))
    }

    /// Translate all points by (dx, dy).
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x.iter_mut().for_each(|v| *v += dx);
        self.y.iter_mut().for_each(|v| *v += dy);
    }

    /// Scale all points relative to origin.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.x.iter_mut().for_each(|v| *v *= sx);
        self.y.iter_mut().for_each(|v| *v *= sy);
    }

    /// Rotate all points around origin.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians (counter-clockwise).
    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        for (x, y) in self.x.iter_mut().zip(self.y.iter_mut()) {
            let (ox, oy) = (*x, *y);
            *x = ox * cos - oy * sin;
            *y = ox * sin + oy * cos;
        }
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> PointIter<'_> {
        PointIter {
            stroke: self,
            index: 0,
        }
    }
}

/// Iterator over Stroke points.
pub struct PointIter<'a> {
    stroke: &'a Stroke,
    index: usize,
}

impl<'a> Iterator for PointIter<'a> {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.stroke.len() {
            let pt = (self.stroke.x[self.index], self.stroke.y[self.index]);
            self.index += 1;
            Some(pt)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stroke.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PointIter<'_> {}

impl<'a> IntoIterator for &'a Stroke {
    type Item = (f32, f32);
    type IntoIter = PointIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(f32, f32)> for Stroke {
    fn from_iter<T: IntoIterator<Item = (f32, f32)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let capacity = upper.unwrap_or(lower);

        let mut stroke = Self::with_capacity(capacity);
        for (x, y) in iter {
            stroke.push(x, y);
        }
        stroke
    }
}
