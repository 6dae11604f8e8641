//! Drawing comparison and verdicts
//!
//! A candidate drawing is scored against a reference in three steps:
//!
//! 1. **Normalization**: both drawings are resampled to the same number of
//!    points per stroke and remapped into the canonical square
//! 2. **Stroke-count penalty**: `|n1 - n2| * stroke_count_weight`
//! 3. **Shape term**: strokes are paired by index and each pair is scored
//!    by its Procrustes disparity; the mean over the common strokes is
//!    added to the penalty
//!
//! Scores are non-negative; `0` means a perfect match. A score is bucketed
//! into a [`Verdict`] using [`VerdictThresholds`].

use crate::procrustes::{MAX_DISPARITY, stroke_disparity};
use crate::{RecogError, RecogResult};
use kakijun_core::{
    DEFAULT_CANVAS_SIZE, DEFAULT_POINT_COUNT, Drawing, NormalizeOptions, NormalizedDrawing,
    normalize,
};

/// Default penalty per missing or extra stroke
pub const DEFAULT_STROKE_COUNT_WEIGHT: f64 = 0.5;

/// Score boundaries between verdicts
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerdictThresholds {
    /// Scores below this are [`Verdict::Good`] (default: 0.03)
    pub good_ok: f64,
    /// Scores below this are [`Verdict::Ok`], the rest [`Verdict::Bad`]
    /// (default: 0.08)
    pub ok_bad: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            good_ok: 0.03,
            ok_bad: 0.08,
        }
    }
}

impl VerdictThresholds {
    /// Create thresholds
    pub fn new(good_ok: f64, ok_bad: f64) -> Self {
        Self { good_ok, ok_bad }
    }

    /// Validate thresholds
    pub fn validate(&self) -> RecogResult<()> {
        if !(self.good_ok.is_finite() && self.ok_bad.is_finite()) {
            return Err(RecogError::InvalidParameter(
                "thresholds must be finite".to_string(),
            ));
        }
        if self.good_ok >= self.ok_bad {
            return Err(RecogError::InvalidParameter(format!(
                "good_ok ({}) must be below ok_bad ({})",
                self.good_ok, self.ok_bad
            )));
        }
        Ok(())
    }
}

/// Quality bucket of a comparison score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Close match
    Good,
    /// Recognizable but sloppy
    Ok,
    /// Wrong shape, order or stroke count
    Bad,
}

impl Verdict {
    /// Bucket a score
    ///
    /// A NaN score is [`Verdict::Bad`].
    pub fn from_score(score: f64, thresholds: &VerdictThresholds) -> Self {
        if score < thresholds.good_ok {
            Verdict::Good
        } else if score < thresholds.ok_bad {
            Verdict::Ok
        } else {
            Verdict::Bad
        }
    }

    /// Upper-case name, as shown on the review screen
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Good => "GOOD",
            Verdict::Ok => "OK",
            Verdict::Bad => "BAD",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for drawing comparison
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareOptions {
    /// Points per stroke after resampling (default: 100)
    pub point_count: usize,

    /// Side of the normalization square (default: 100.0)
    pub canvas_size: f64,

    /// Penalty added per missing or extra stroke (default: 0.5)
    pub stroke_count_weight: f64,

    /// Permit mirrored fits (default: false)
    pub allow_reflection: bool,

    /// Verdict boundaries
    pub thresholds: VerdictThresholds,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            canvas_size: DEFAULT_CANVAS_SIZE,
            stroke_count_weight: DEFAULT_STROKE_COUNT_WEIGHT,
            allow_reflection: false,
            thresholds: VerdictThresholds::default(),
        }
    }
}

impl CompareOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resample point count
    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Set the normalization square size
    pub fn with_canvas_size(mut self, canvas_size: f64) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    /// Set the per-stroke count penalty
    pub fn with_stroke_count_weight(mut self, weight: f64) -> Self {
        self.stroke_count_weight = weight;
        self
    }

    /// Allow or forbid mirrored fits
    pub fn with_allow_reflection(mut self, allow: bool) -> Self {
        self.allow_reflection = allow;
        self
    }

    /// Set the verdict thresholds
    pub fn with_thresholds(mut self, good_ok: f64, ok_bad: f64) -> Self {
        self.thresholds = VerdictThresholds::new(good_ok, ok_bad);
        self
    }

    /// Normalization options derived from these options
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions::new()
            .with_point_count(self.point_count)
            .with_canvas_size(self.canvas_size)
    }

    /// Validate the options used for scoring
    ///
    /// Thresholds are checked separately by [`classify`].
    pub fn validate(&self) -> RecogResult<()> {
        self.normalize_options().validate()?;
        if !(self.stroke_count_weight.is_finite() && self.stroke_count_weight >= 0.0) {
            return Err(RecogError::InvalidParameter(
                "stroke_count_weight must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Compare a candidate drawing with a reference
///
/// # Arguments
///
/// * `reference` - The model drawing
/// * `candidate` - The attempt to score
/// * `options` - Comparison options
///
/// # Returns
///
/// Dissimilarity score, `>= 0`. Every missing or extra stroke adds
/// `options.stroke_count_weight`.
///
/// # Errors
///
/// Returns [`RecogError::EmptyDrawing`] if either drawing has no strokes
/// and a core error for strokes with fewer than 2 points.
pub fn compare(
    reference: &Drawing,
    candidate: &Drawing,
    options: &CompareOptions,
) -> RecogResult<f64> {
    options.validate()?;
    if reference.is_empty() || candidate.is_empty() {
        return Err(RecogError::EmptyDrawing);
    }
    let norm_opts = options.normalize_options();
    let reference = normalize(reference, &norm_opts)?;
    let candidate = normalize(candidate, &norm_opts)?;
    compare_normalized(&reference, &candidate, options)
}

/// Compare two drawings that are already normalized
///
/// Resampling and canvas fields of `options` are not consulted; only the
/// penalty weight and the reflection flag are.
///
/// # Errors
///
/// Returns [`RecogError::ShapeMismatch`] if the drawings were normalized
/// with different point counts.
pub fn compare_normalized(
    reference: &NormalizedDrawing,
    candidate: &NormalizedDrawing,
    options: &CompareOptions,
) -> RecogResult<f64> {
    options.validate()?;
    let (n1, n2) = (reference.stroke_count(), candidate.stroke_count());
    if n1 == 0 || n2 == 0 {
        return Err(RecogError::EmptyDrawing);
    }
    let penalty = n1.abs_diff(n2) as f64 * options.stroke_count_weight;
    let disparities = stroke_disparities(reference, candidate, options.allow_reflection)?;
    let mean = if disparities.is_empty() {
        MAX_DISPARITY
    } else {
        disparities.iter().sum::<f64>() / disparities.len() as f64
    };
    let score = mean + penalty;

    tracing::debug!(
        reference_strokes = n1,
        candidate_strokes = n2,
        penalty,
        mean_disparity = mean,
        score,
        "compared drawings"
    );
    Ok(score)
}

/// Per-stroke disparities of the strokes both drawings share
///
/// Strokes are paired by index; the result has `min(n1, n2)` entries, each
/// in `[0, 1]`.
///
/// # Errors
///
/// Returns [`RecogError::ShapeMismatch`] if the drawings were normalized
/// with different point counts.
pub fn stroke_disparities(
    reference: &NormalizedDrawing,
    candidate: &NormalizedDrawing,
    allow_reflection: bool,
) -> RecogResult<Vec<f64>> {
    if reference.point_count() != candidate.point_count() {
        return Err(RecogError::ShapeMismatch(format!(
            "point counts differ: {} vs {}",
            reference.point_count(),
            candidate.point_count()
        )));
    }
    reference
        .iter()
        .zip(candidate.iter())
        .enumerate()
        .map(|(i, (r, c))| -> RecogResult<f64> {
            let d = stroke_disparity(r, c, allow_reflection)?;
            tracing::trace!(stroke = i, disparity = d, "stroke disparity");
            Ok(d)
        })
        .collect()
}

/// Compare and bucket the score into a verdict
///
/// # Errors
///
/// Returns [`RecogError::InvalidParameter`] if `good_ok >= ok_bad`, plus
/// every error of [`compare`].
pub fn classify(
    reference: &Drawing,
    candidate: &Drawing,
    options: &CompareOptions,
) -> RecogResult<Verdict> {
    options.thresholds.validate()?;
    let score = compare(reference, candidate, options)?;
    Ok(Verdict::from_score(score, &options.thresholds))
}
