//! Two-dimensional Procrustes superimposition
//!
//! Fits one point set onto another with known point correspondence using a
//! similarity transform (translation, uniform scale, rotation and, when
//! allowed, a reflection). Both sets are centred on their centroids and
//! scaled to unit Frobenius norm before fitting, so the residual (the
//! *disparity*) lies in `[0, 1]`:
//!
//! - `0` means the shapes are identical up to the transform
//! - `1` means nothing of the reference is explained by the candidate
//!
//! # Algorithm
//!
//! Treating points as complex numbers `a_k`, `b_k` of the standardized
//! reference and candidate, the best rotation-and-scale is the complex
//! factor `z = sum(a_k * conj(b_k))` and the residual is `1 - |z|^2`.
//! With reflections allowed the mirrored candidate is fitted as well
//! (`z' = sum(a_k * b_k)`) and the better of the two is kept. Swapping the
//! two sets conjugates `z`, so the disparity is symmetric.

use crate::{RecogError, RecogResult};
use kakijun_core::Stroke;

/// Sum of squares below which a centred point set has no shape.
const MIN_SUM_OF_SQUARES: f64 = 1e-12;

/// Disparity reported for degenerate input.
pub const MAX_DISPARITY: f64 = 1.0;

/// Result of a Procrustes fit
///
/// The transform maps candidate points into the reference frame:
/// `p' = scale * R(rotation) * M(p) + translation`, where `M` mirrors
/// `y` when `reflected` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcrustesFit {
    /// Normalized residual sum of squares in `[0, 1]`
    pub disparity: f64,
    /// Rotation angle in radians, counterclockwise
    pub rotation: f64,
    /// Uniform scale factor
    pub scale: f64,
    /// Translation applied after scaling and rotation
    pub translation: (f64, f64),
    /// Whether the candidate is mirrored before rotating
    pub reflected: bool,
}

impl ProcrustesFit {
    /// Fit used for degenerate input: maximal disparity, identity transform.
    pub fn degenerate() -> Self {
        Self {
            disparity: MAX_DISPARITY,
            rotation: 0.0,
            scale: 1.0,
            translation: (0.0, 0.0),
            reflected: false,
        }
    }

    /// Map one candidate point into the reference frame
    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let y = if self.reflected { -y } else { y };
        let (sin, cos) = self.rotation.sin_cos();
        (
            self.scale * (cos * x - sin * y) + self.translation.0,
            self.scale * (sin * x + cos * y) + self.translation.1,
        )
    }

    /// Map a candidate stroke into the reference frame
    pub fn apply_stroke(&self, stroke: &Stroke) -> Stroke {
        stroke
            .iter()
            .map(|(x, y)| {
                let (tx, ty) = self.apply((x as f64, y as f64));
                (tx as f32, ty as f32)
            })
            .collect()
    }
}

/// Centroid and sum of squared deviations of a point set
fn center(points: &[(f64, f64)]) -> ((f64, f64), f64) {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    let (mx, my) = (sx / n, sy / n);
    let ss = points
        .iter()
        .map(|&(x, y)| (x - mx).powi(2) + (y - my).powi(2))
        .sum();
    ((mx, my), ss)
}

/// Fit `candidate` onto `reference` with index correspondence
///
/// Degenerate input (a point set without spread, or non-finite values)
/// yields [`ProcrustesFit::degenerate`] rather than an error.
///
/// # Errors
///
/// Returns [`RecogError::ShapeMismatch`] if the point sets differ in
/// length or are empty.
pub fn procrustes(
    reference: &[(f64, f64)],
    candidate: &[(f64, f64)],
    allow_reflection: bool,
) -> RecogResult<ProcrustesFit> {
    if reference.len() != candidate.len() {
        return Err(RecogError::ShapeMismatch(format!(
            "point sets differ in length: {} vs {}",
            reference.len(),
            candidate.len()
        )));
    }
    if reference.is_empty() {
        return Err(RecogError::ShapeMismatch("point sets are empty".to_string()));
    }

    let ((rmx, rmy), rss) = center(reference);
    let ((cmx, cmy), css) = center(candidate);
    if !(rss.is_finite() && css.is_finite())
        || rss < MIN_SUM_OF_SQUARES
        || css < MIN_SUM_OF_SQUARES
    {
        tracing::debug!(
            reference_ss = rss,
            candidate_ss = css,
            "degenerate point set, using maximal disparity"
        );
        return Ok(ProcrustesFit::degenerate());
    }
    let (rn, cn) = (rss.sqrt(), css.sqrt());

    // z = sum(a * conj(b)), zr = sum(a * b)
    let (mut zre, mut zim) = (0.0f64, 0.0f64);
    let (mut rre, mut rim) = (0.0f64, 0.0f64);
    for (&(rx, ry), &(px, py)) in reference.iter().zip(candidate) {
        let (ax, ay) = ((rx - rmx) / rn, (ry - rmy) / rn);
        let (bx, by) = ((px - cmx) / cn, (py - cmy) / cn);
        zre += ax * bx + ay * by;
        zim += ay * bx - ax * by;
        rre += ax * bx - ay * by;
        rim += ax * by + ay * bx;
    }

    let direct = zre.hypot(zim);
    let mirrored = rre.hypot(rim);
    let (reflected, fre, fim, modulus) = if allow_reflection && mirrored > direct {
        (true, rre, rim, mirrored)
    } else {
        (false, zre, zim, direct)
    };
    if !modulus.is_finite() {
        tracing::debug!("non-finite fit, using maximal disparity");
        return Ok(ProcrustesFit::degenerate());
    }

    let disparity = (1.0 - modulus * modulus).clamp(0.0, MAX_DISPARITY);
    let scale = modulus * rn / cn;
    let rotation = fim.atan2(fre);

    // Translation moves the transformed candidate centroid onto the reference centroid
    let fit = ProcrustesFit {
        disparity,
        rotation,
        scale,
        translation: (0.0, 0.0),
        reflected,
    };
    let (tx, ty) = fit.apply((cmx, cmy));
    Ok(ProcrustesFit {
        translation: (rmx - tx, rmy - ty),
        ..fit
    })
}

/// Disparity between two strokes of equal length
///
/// # Errors
///
/// Returns [`RecogError::ShapeMismatch`] if the strokes differ in length
/// or are empty.
pub fn stroke_disparity(
    reference: &Stroke,
    candidate: &Stroke,
    allow_reflection: bool,
) -> RecogResult<f64> {
    let fit = procrustes(
        &reference.to_f64_points(),
        &candidate.to_f64_points(),
        allow_reflection,
    )?;
    Ok(fit.disparity)
}
