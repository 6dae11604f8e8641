//! Property tests for comparison and Procrustes fitting

use kakijun_core::{Drawing, Stroke};
use kakijun_recog::{CompareOptions, RecogError, VerdictThresholds, classify, compare, procrustes};
use proptest::prelude::*;

fn arb_points(len: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), len)
}

fn arb_stroke() -> impl Strategy<Value = Stroke> {
    prop::collection::vec((0.0f32..100.0, 0.0f32..100.0), 3..20)
        .prop_map(|pts| pts.into_iter().collect::<Stroke>())
}

fn arb_drawing(max_strokes: usize) -> impl Strategy<Value = Drawing> {
    prop::collection::vec(arb_stroke(), 1..=max_strokes)
        .prop_map(|strokes| strokes.into_iter().collect::<Drawing>())
}

proptest! {
    #[test]
    fn disparity_is_bounded_and_symmetric(
        (a, b) in (3usize..30).prop_flat_map(|n| (arb_points(n), arb_points(n))),
        allow_reflection in any::<bool>(),
    ) {
        let ab = procrustes(&a, &b, allow_reflection).expect("equal lengths");
        let ba = procrustes(&b, &a, allow_reflection).expect("equal lengths");
        prop_assert!((0.0..=1.0).contains(&ab.disparity));
        prop_assert!((ab.disparity - ba.disparity).abs() < 1e-9);
    }

    #[test]
    fn reflection_never_hurts(
        (a, b) in (3usize..30).prop_flat_map(|n| (arb_points(n), arb_points(n))),
    ) {
        let strict = procrustes(&a, &b, false).expect("equal lengths").disparity;
        let free = procrustes(&a, &b, true).expect("equal lengths").disparity;
        prop_assert!(free <= strict + 1e-12);
    }

    #[test]
    fn similarity_transform_is_invisible(
        a in arb_points(12),
        angle in -3.0f64..3.0,
        scale in 0.2f64..5.0,
        dx in -50.0f64..50.0,
        dy in -50.0f64..50.0,
    ) {
        let (sin, cos) = angle.sin_cos();
        let b: Vec<_> = a
            .iter()
            .map(|&(x, y)| (scale * (cos * x - sin * y) + dx, scale * (sin * x + cos * y) + dy))
            .collect();
        let fit = procrustes(&a, &b, false).expect("equal lengths");
        prop_assert!(fit.disparity < 1e-9);
    }

    #[test]
    fn self_compare_is_near_zero(d in arb_drawing(4)) {
        let score = compare(&d, &d, &CompareOptions::default()).expect("valid drawing");
        prop_assert!(score < 1e-9);
    }

    #[test]
    fn extra_strokes_cost_at_least_their_weight(
        d in arb_drawing(3),
        extra in prop::collection::vec(arb_stroke(), 1..4),
        weight in 0.0f64..2.0,
    ) {
        let k = extra.len();
        let mut longer = d.clone();
        for s in extra {
            longer.push(s);
        }
        let opts = CompareOptions::default().with_stroke_count_weight(weight);
        let score = compare(&d, &longer, &opts).expect("valid drawings");
        prop_assert!(score >= k as f64 * weight);
        prop_assert!(score <= k as f64 * weight + 1.0 + 1e-12);
    }

    #[test]
    fn classify_rejects_unordered_thresholds(
        good_ok in 0.0f64..1.0,
        gap in 0.0f64..1.0,
    ) {
        let d = Drawing::from_flat_strokes(&[vec![0.0, 0.0, 5.0, 3.0, 10.0, 0.0]]).expect("drawing");
        let opts = CompareOptions {
            thresholds: VerdictThresholds::new(good_ok, good_ok - gap),
            ..CompareOptions::default()
        };
        prop_assert!(matches!(
            classify(&d, &d, &opts),
            Err(RecogError::InvalidParameter(_))
        ));
    }
}
