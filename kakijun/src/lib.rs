//! kakijun - Handwriting comparison for Japanese character practice
//!
//! Scores a learner's stroke-by-stroke drawing of a character against a
//! model drawing and reports how close it is.
//!
//! # Overview
//!
//! - Stroke and drawing types, resampling and normalization
//! - Procrustes-based stroke disparity with a stroke-count penalty
//! - GOOD / OK / BAD verdicts against configurable thresholds
//! - Lookup of the closest reference among same-stroke-count drawings
//!
//! # Example
//!
//! ```
//! use kakijun::{CompareOptions, Drawing, Verdict};
//!
//! let reference = Drawing::from_flat_strokes(&[
//!     vec![10.0, 40.0, 50.0, 38.0, 90.0, 40.0],
//!     vec![50.0, 10.0, 52.0, 50.0, 50.0, 90.0],
//! ])
//! .unwrap();
//! let attempt = Drawing::from_flat_strokes(&[
//!     vec![110.0, 180.0, 190.0, 176.0, 270.0, 180.0],
//!     vec![190.0, 120.0, 194.0, 200.0, 190.0, 280.0],
//! ])
//! .unwrap();
//!
//! let verdict = kakijun::recog::classify(&reference, &attempt, &CompareOptions::default()).unwrap();
//! assert_eq!(verdict, Verdict::Good);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use kakijun_core::*;

// Re-export the comparison crate as a module, plus its common entry points
pub use kakijun_recog as recog;
pub use kakijun_recog::{
    BestMatch, CompareOptions, RecogError, RecogResult, Reference, ReferenceSet, Verdict,
    VerdictThresholds,
};
