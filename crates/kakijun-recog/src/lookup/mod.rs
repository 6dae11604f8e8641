//! Reference lookup
//!
//! Finds the stored reference drawing closest to a candidate.
//!
//! # Overview
//!
//! References are kept in a [`ReferenceSet`], grouped by stroke count.
//! A lookup only scans the group whose stroke count equals the
//! candidate's, scores every reference in it with
//! [`compare`](crate::compare::compare) and keeps the lowest score. Ties
//! keep the reference inserted first.
//!
//! # Example
//!
//! ```
//! use kakijun_core::Drawing;
//! use kakijun_recog::{CompareOptions, ReferenceSet, find_best_match};
//!
//! let ichi = Drawing::from_flat_strokes(&[vec![10.0, 50.0, 50.0, 48.0, 90.0, 50.0]]).unwrap();
//! let mut set = ReferenceSet::new();
//! set.insert("一", ichi.clone()).unwrap();
//!
//! let best = find_best_match(&ichi, &set, &CompareOptions::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(best.label(), "一");
//! ```

mod ident;
mod set;
mod types;

pub use ident::*;
pub use set::*;
pub use types::*;
