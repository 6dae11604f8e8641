//! Canvas fitting and chunk signature regression test
//!
//! Test structure:
//!   Test 0: fixtures fitted onto a padded canvas are centred and touch
//!           the padding on their longer side
//!   Test 1: flip_y mirrors within the drawn box
//!   Test 2: chunk signatures of an attempt are closer to its own
//!           reference than to other characters

use kakijun_core::{
    ChunkSignature, DEFAULT_CHUNK_COUNT, Drawing, FitOptions, chunk_stroke, fit_to_canvas,
};
use kakijun_test::{RegParams, load_test_drawing};

/// Test 0: Aspect-preserving fit onto a 124x124 canvas with 12 px padding
#[test]
fn test_0_fit_centered() {
    let mut rp = RegParams::new("fit_0_centered");
    let opts = FitOptions::new(124.0, 124.0);

    for name in ["ichi.strokes", "ju.strokes", "kuchi_attempt.strokes"] {
        let d = load_test_drawing(name).expect("load fixture");
        let fitted = fit_to_canvas(&d, &opts).expect("fit");
        let (x0, y0, x1, y1) = fitted.bounding_box().expect("points");
        let (w, h) = ((x1 - x0) as f64, (y1 - y0) as f64);
        eprintln!("{name}: {w:.2} x {h:.2}");
        rp.compare_values(100.0, w.max(h), 1e-3);
        rp.compare_values(62.0, (x0 + x1) as f64 / 2.0, 1e-3);
        rp.compare_values(62.0, (y0 + y1) as f64 / 2.0, 1e-3);
    }

    assert!(rp.cleanup(), "fit test 0 (centered) failed");
}

/// Test 1: Vertical mirroring
#[test]
fn test_1_flip_y() {
    let mut rp = RegParams::new("fit_1_flip_y");

    let d = load_test_drawing("ko.strokes").expect("load ko");
    let plain = fit_to_canvas(&d, &FitOptions::default()).expect("fit");
    let flipped = fit_to_canvas(&d, &FitOptions::default().with_flip_y(true)).expect("fit");
    let (_, y0, _, y1) = plain.bounding_box().expect("points");
    let mirror = (y0 + y1) as f64;
    for (p, f) in plain.iter().zip(flipped.iter()) {
        for ((px, py), (fx, fy)) in p.iter().zip(f.iter()) {
            rp.compare_values(px as f64, fx as f64, 1e-4);
            rp.compare_values(mirror - py as f64, fy as f64, 1e-3);
        }
    }

    assert!(rp.cleanup(), "fit test 1 (flip_y) failed");
}

/// Test 2: Chunk signatures
#[test]
fn test_2_signatures() {
    let mut rp = RegParams::new("fit_2_signatures");

    let ju = load_test_drawing("ju.strokes").expect("load ju");
    let attempt = load_test_drawing("ju_attempt.strokes").expect("load attempt");
    let ni = load_test_drawing("ni.strokes").expect("load ni");

    let sig = |d: &Drawing| ChunkSignature::from_drawing(d, DEFAULT_CHUNK_COUNT).expect("signature");
    let (s_ju, s_attempt, s_ni) = (sig(&ju), sig(&attempt), sig(&ni));
    rp.compare_values(2.0, s_ju.stroke_count() as f64, 0.0);
    rp.compare_values(9.0, s_ju.chunk_count() as f64, 0.0);
    rp.compare_true(
        s_ju.strokes()
            .iter()
            .flat_map(|s| s.iter())
            .all(|(x, y)| (0.0..=100.0).contains(&x) && (0.0..=100.0).contains(&y)),
        "signature within the [0, 100] frame",
    );

    let near = s_ju.mean_abs_difference(&s_attempt).expect("same shape");
    let far = s_ni.mean_abs_difference(&s_attempt).expect("same shape");
    eprintln!("ju: {near:.3}, ni: {far:.3}");
    rp.compare_true(near < 15.0, "attempt close to its reference");
    rp.compare_true(far > 2.0 * near, "attempt far from another character");

    // Remainder goes to the last chunk: 16 points in 9 chunks is 8 x 1 + 8
    let first = ju.get(0).expect("stroke");
    let chunks = chunk_stroke(first, 9).expect("chunk");
    rp.compare_values(9.0, chunks.len() as f64, 0.0);
    rp.compare_values(
        first.get_x(0).expect("x") as f64,
        chunks.get_x(0).expect("x") as f64,
        1e-4,
    );

    assert!(rp.cleanup(), "fit test 2 (signatures) failed");
}
