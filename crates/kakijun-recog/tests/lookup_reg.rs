//! Reference lookup regression test
//!
//! Test structure:
//!   Test 0: attempts are identified among the fixture references
//!   Test 1: only the group with the candidate's stroke count is scanned
//!   Test 2: ranking order and ties
//!   Test 3: signature lookup agrees on the fixture attempts
//!   Test 4: replacing a reference by label

use std::collections::BTreeMap;

use kakijun_core::{Drawing, Stroke};
use kakijun_recog::{
    CompareOptions, Reference, ReferenceSet, find_best_match, find_best_match_by_signature,
    rank_matches,
};
use kakijun_test::{RegParams, init_logging, load_test_drawing};

fn load_references() -> ReferenceSet {
    let mut set = ReferenceSet::new();
    for (label, name) in [
        ("一", "ichi.strokes"),
        ("十", "ju.strokes"),
        ("二", "ni.strokes"),
        ("こ", "ko.strokes"),
        ("口", "kuchi.strokes"),
        ("木", "ki.strokes"),
    ] {
        let drawing = load_test_drawing(name).expect("load reference");
        set.insert(label, drawing).expect("insert reference");
    }
    set
}

/// Synthetic drawing with `strokes` strokes of a bent shape scaled by `s`
fn make_bent(strokes: usize, s: f32) -> Drawing {
    (0..strokes)
        .map(|i| {
            let y = i as f32 * 10.0;
            Stroke::from_points(&[
                (0.0, y),
                (5.0 * s, y + 1.0 * s),
                (10.0 * s, y),
                (10.0 * s, y + 4.0 * s),
            ])
            .expect("stroke")
        })
        .collect()
}

/// Test 0: Fixture attempts find their references
#[test]
fn test_0_identify_attempts() {
    init_logging();
    let mut rp = RegParams::new("lookup_0_identify");
    let set = load_references();
    let opts = CompareOptions::default();
    rp.compare_values(6.0, set.len() as f64, 0.0);

    for (attempt, expected) in [
        ("ju_attempt.strokes", "十"),
        ("kuchi_attempt.strokes", "口"),
        ("ki.strokes", "木"),
    ] {
        let candidate = load_test_drawing(attempt).expect("load attempt");
        let best = find_best_match(&candidate, &set, &opts)
            .expect("lookup")
            .expect("a reference with the same stroke count");
        eprintln!("{attempt}: {} ({:.6})", best.label(), best.score);
        rp.compare_strings(expected, best.label());
        rp.compare_true(best.score < opts.thresholds.good_ok, "best match is GOOD");
    }

    // No five-stroke reference
    let five = make_bent(5, 1.0);
    rp.compare_true(
        find_best_match(&five, &set, &opts).expect("lookup").is_none(),
        "no match without a group",
    );

    assert!(rp.cleanup(), "lookup test 0 (identify) failed");
}

/// Test 1: Groups {3, 5, 7}, candidate with 5 strokes
#[test]
fn test_1_group_selection() {
    init_logging();
    let mut rp = RegParams::new("lookup_1_groups");

    let mut groups = BTreeMap::new();
    for count in [3usize, 5, 7] {
        let refs = (0..3)
            .map(|i| {
                Reference::new(
                    format!("g{count}-{i}"),
                    make_bent(count, 1.0 + i as f32),
                )
            })
            .collect::<Vec<_>>();
        groups.insert(count, refs);
    }
    let set = ReferenceSet::from_groups(groups).expect("valid groups");
    rp.compare_values(9.0, set.len() as f64, 0.0);

    let candidate = make_bent(5, 2.5);
    let opts = CompareOptions::default();
    let ranked = rank_matches(&candidate, &set, &opts, usize::MAX).expect("rank");
    rp.compare_values(3.0, ranked.len() as f64, 0.0);
    rp.compare_true(
        ranked.iter().all(|m| m.label().starts_with("g5-")),
        "only the five-stroke group is scored",
    );
    let best = find_best_match(&candidate, &set, &opts)
        .expect("lookup")
        .expect("match");
    rp.compare_true(best.label().starts_with("g5-"), "winner from group 5");

    assert!(rp.cleanup(), "lookup test 1 (groups) failed");
}

/// Test 2: Ranking is closest first; equal scores keep insertion order
#[test]
fn test_2_ranking() {
    init_logging();
    let mut rp = RegParams::new("lookup_2_ranking");
    let set = load_references();
    let opts = CompareOptions::default();

    let candidate = load_test_drawing("ju_attempt.strokes").expect("load attempt");
    let ranked = rank_matches(&candidate, &set, &opts, 10).expect("rank");
    let labels: Vec<_> = ranked.iter().map(|m| m.label()).collect();
    eprintln!("ranking: {labels:?}");
    rp.compare_values(3.0, ranked.len() as f64, 0.0);
    rp.compare_strings("十", labels[0]);
    rp.compare_strings("こ", labels[2]);
    rp.compare_true(
        ranked.windows(2).all(|w| w[0].score <= w[1].score),
        "scores ascending",
    );
    let limited = rank_matches(&candidate, &set, &opts, 1).expect("rank");
    rp.compare_values(1.0, limited.len() as f64, 0.0);

    // Two references with the same drawing tie; the first inserted wins
    let ju = load_test_drawing("ju.strokes").expect("load ju");
    let mut twins = ReferenceSet::new();
    twins.insert("first", ju.clone()).expect("insert");
    twins.insert("second", ju.clone()).expect("insert");
    let best = find_best_match(&ju, &twins, &opts)
        .expect("lookup")
        .expect("match");
    rp.compare_strings("first", best.label());

    assert!(rp.cleanup(), "lookup test 2 (ranking) failed");
}

/// Test 3: Chunk signature lookup
#[test]
fn test_3_signature_lookup() {
    init_logging();
    let mut rp = RegParams::new("lookup_3_signature");
    let set = load_references();

    for (attempt, expected) in [
        ("ju_attempt.strokes", "十"),
        ("kuchi_attempt.strokes", "口"),
    ] {
        let candidate = load_test_drawing(attempt).expect("load attempt");
        let best = find_best_match_by_signature(&candidate, &set, 9)
            .expect("lookup")
            .expect("match");
        eprintln!("{attempt}: {} ({:.3})", best.label(), best.score);
        rp.compare_strings(expected, best.label());
    }

    assert!(rp.cleanup(), "lookup test 3 (signature) failed");
}

/// Test 4: Re-inserting a label replaces the old reference
#[test]
fn test_4_replace_reference() {
    init_logging();
    let mut rp = RegParams::new("lookup_4_replace");
    let mut set = load_references();
    let opts = CompareOptions::default();

    // Re-record 十 with the 口 fixture: it moves to the three-stroke group
    let kuchi = load_test_drawing("kuchi.strokes").expect("load kuchi");
    let old = set.insert("十", kuchi).expect("insert");
    rp.compare_true(old.is_some(), "previous reference returned");
    rp.compare_values(6.0, set.len() as f64, 0.0);
    rp.compare_values(2.0, set.group(2).len() as f64, 0.0);
    rp.compare_values(2.0, set.group(3).len() as f64, 0.0);

    let candidate = load_test_drawing("ju_attempt.strokes").expect("load attempt");
    let best = find_best_match(&candidate, &set, &opts)
        .expect("lookup")
        .expect("match");
    rp.compare_strings("二", best.label());

    rp.compare_true(set.remove("十").is_some(), "remove");
    rp.compare_values(5.0, set.len() as f64, 0.0);

    assert!(rp.cleanup(), "lookup test 4 (replace) failed");
}
