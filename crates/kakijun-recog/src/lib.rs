//! kakijun-recog - Handwritten stroke comparison
//!
//! This crate scores a handwritten character attempt against model
//! drawings:
//!
//! - **Procrustes superimposition**: Shape disparity of two strokes after
//!   the best translation, scale and rotation
//! - **Comparison**: Stroke-count penalty plus mean stroke disparity,
//!   bucketed into a GOOD / OK / BAD verdict
//! - **Lookup**: Closest reference among those with the same stroke count
//!
//! # Quick Start
//!
//! ```
//! use kakijun_core::Drawing;
//! use kakijun_recog::{CompareOptions, Verdict, classify};
//!
//! let reference = Drawing::from_flat_strokes(&[
//!     vec![10.0, 50.0, 50.0, 51.0, 90.0, 50.0],
//!     vec![50.0, 10.0, 49.0, 50.0, 50.0, 90.0],
//! ])
//! .unwrap();
//! let verdict = classify(&reference, &reference, &CompareOptions::default()).unwrap();
//! assert_eq!(verdict, Verdict::Good);
//! ```
//!
//! # Modules
//!
//! - [`procrustes`]: Two-dimensional Procrustes fit
//! - [`compare`]: Scores, options and verdicts
//! - [`lookup`]: Reference sets and best-match search

pub mod compare;
mod error;
pub mod lookup;
pub mod procrustes;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use compare::{
    CompareOptions, DEFAULT_STROKE_COUNT_WEIGHT, Verdict, VerdictThresholds, classify, compare,
    compare_normalized, stroke_disparities,
};
pub use lookup::{
    BestMatch, Reference, ReferenceSet, find_best_match, find_best_match_by_signature,
    rank_matches,
};
pub use procrustes::{ProcrustesFit, procrustes, stroke_disparity};

// Re-export core for convenience
pub use kakijun_core;
