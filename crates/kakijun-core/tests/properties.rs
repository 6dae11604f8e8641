//! Property tests for resampling, normalization and chunking

use kakijun_core::{Drawing, NormalizeOptions, Stroke, chunk_stroke, normalize};
use proptest::prelude::*;

fn arb_stroke(min_len: usize) -> impl Strategy<Value = Stroke> {
    prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), min_len..40)
        .prop_map(|pts| pts.into_iter().collect::<Stroke>())
}

proptest! {
    #[test]
    fn resample_keeps_endpoints(s in arb_stroke(2), npts in 2usize..150) {
        let r = s.resample(npts).expect("valid stroke");
        prop_assert_eq!(r.len(), npts);
        prop_assert_eq!(r.first(), s.first());
        prop_assert_eq!(r.last(), s.last());
    }

    #[test]
    fn resample_is_idempotent(s in arb_stroke(2), npts in 2usize..150) {
        let once = s.resample(npts).expect("valid stroke");
        let twice = once.resample(npts).expect("valid stroke");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resample_stays_within_bounds(s in arb_stroke(2), npts in 2usize..150) {
        let (x0, y0, x1, y1) = s.bounding_box().expect("points");
        let r = s.resample(npts).expect("valid stroke");
        for (x, y) in r.iter() {
            prop_assert!(x >= x0 && x <= x1 && y >= y0 && y <= y1);
        }
    }

    #[test]
    fn normalized_points_fill_frame(
        strokes in prop::collection::vec(arb_stroke(2), 1..5),
        size in 1.0f64..500.0,
    ) {
        let d: Drawing = strokes.into_iter().collect();
        let opts = NormalizeOptions::new().with_point_count(16).with_canvas_size(size);
        let n = normalize(&d, &opts).expect("valid drawing");
        let bound = size as f32 * (1.0 + 1e-6);
        for s in n.iter() {
            prop_assert_eq!(s.len(), 16);
            for (x, y) in s.iter() {
                prop_assert!((0.0..=bound).contains(&x) && (0.0..=bound).contains(&y));
            }
        }
    }

    #[test]
    fn chunking_yields_requested_count(s in arb_stroke(9), chunks in 1usize..10) {
        let c = chunk_stroke(&s, chunks).expect("enough points");
        prop_assert_eq!(c.len(), chunks);
    }
}
