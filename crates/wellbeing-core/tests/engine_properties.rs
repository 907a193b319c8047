//! End-to-end properties of the similarity and profiling engine.
//!
//! These tests exercise the public API the way the request-handling layer
//! does, covering the contractual boundary behavior: exact short-circuit,
//! symmetry, score range, norm invariants, direction-over-magnitude, and
//! the degenerate all-zero cases.

use wellbeing_core::questions::QUESTION_ORDER;
use wellbeing_core::similarity::{self, DOMINANT_WEIGHT, HIGH_AGREEMENT_CUTOFF};
use wellbeing_core::{build_profile, AnswerVector, FeatureVector, ProfileDimension, FEATURE_DIM};

fn full_answers(value: u8) -> AnswerVector {
    AnswerVector::from_pairs(QUESTION_ORDER.iter().map(|qid| (qid.to_string(), value)))
}

fn answers_from(raw: &[(&str, u8)]) -> AnswerVector {
    AnswerVector::from_pairs(raw.iter().map(|(id, v)| (id.to_string(), *v)))
}

/// A spread of representative answer sets for property checks.
fn sample_answer_sets() -> Vec<AnswerVector> {
    vec![
        AnswerVector::new(),
        full_answers(0),
        full_answers(1),
        full_answers(3),
        answers_from(&[("ack_1", 2), ("bp_2", 3), ("gd_3", 1), ("rc_1", 2)]),
        answers_from(&[("ack_1", 3), ("ack_2", 3), ("ack_3", 3)]),
        answers_from(&[("mystery", 3), ("rc_2", 1)]),
    ]
}

#[test]
fn self_similarity_is_exactly_one() {
    for answers in sample_answer_sets() {
        assert_eq!(
            similarity::score(&answers, &answers.clone()),
            1.0,
            "score(A, A) must short-circuit to exactly 1.0 for {:?}",
            answers
        );
    }
}

#[test]
fn score_is_symmetric_and_bounded() {
    let sets = sample_answer_sets();
    for a in &sets {
        for b in &sets {
            let ab = similarity::score(a, b);
            let ba = similarity::score(b, a);
            assert_eq!(ab, ba, "symmetry violated for {:?} vs {:?}", a, b);
            assert!((0.0..=1.0).contains(&ab), "score {} out of range", ab);
            assert!(!ab.is_nan());
        }
    }
}

#[test]
fn feature_vectors_are_unit_norm_or_zero() {
    for answers in sample_answer_sets() {
        let features = FeatureVector::from_answers(&answers);
        assert_eq!(features.as_slice().len(), FEATURE_DIM);
        let norm = features.norm();
        assert!(
            norm == 0.0 || (norm - 1.0).abs() < 1e-9,
            "norm must be 0 or 1, got {} for {:?}",
            norm,
            answers
        );
    }
}

#[test]
fn scaled_answers_keep_directional_agreement() {
    // All 2s scaled by 1.5 to all 3s: zero exact matches, yet the feature
    // directions stay aligned and the cosine term carries the score.
    let a = full_answers(2);
    let scaled = full_answers(3);

    assert_eq!(similarity::exact_ratio(&a, &scaled), 0.0);

    let cosine = FeatureVector::from_answers(&a).dot(&FeatureVector::from_answers(&scaled));
    assert!(
        cosine > 0.99,
        "scaling answers must preserve pattern direction, cosine = {}",
        cosine
    );

    let score = similarity::score(&a, &scaled);
    assert!((score - DOMINANT_WEIGHT * cosine).abs() < 1e-12);
}

#[test]
fn high_agreement_scenario_weights_exact_ratio() {
    // Identical on 11 of 12 questions; the differing question stays within
    // one category. 11/12 >= 0.9, so the exact ratio takes the 0.6 weight.
    let mut a = full_answers(1);
    let mut b = full_answers(1);
    a.insert("bp_2", 0);
    b.insert("bp_2", 2);

    let exact = similarity::exact_ratio(&a, &b);
    assert!((exact - 11.0 / 12.0).abs() < 1e-12);
    assert!(exact >= HIGH_AGREEMENT_CUTOFF);

    let cosine = FeatureVector::from_answers(&a).dot(&FeatureVector::from_answers(&b));
    let expected = DOMINANT_WEIGHT * exact + (1.0 - DOMINANT_WEIGHT) * cosine;
    assert!((similarity::score(&a, &b) - expected.clamp(0.0, 1.0)).abs() < 1e-12);
}

#[test]
fn all_zero_participants_compare_cleanly() {
    let zero_a = full_answers(0);
    let zero_b = AnswerVector::new();

    // Both are all-default: exact ratio 1.0 short-circuits despite both
    // feature vectors being zero.
    assert_eq!(similarity::score(&zero_a, &zero_b), 1.0);

    // Zero vector against a populated one: cosine contributes 0, no NaN.
    let other = full_answers(3);
    let score = similarity::score(&zero_a, &other);
    assert!(!score.is_nan());
    assert!((0.0..=1.0).contains(&score));
}

#[test]
fn profile_reference_scenario() {
    let answers = answers_from(&[
        ("ack_1", 2),
        ("ack_2", 3),
        ("ack_3", 1),
        ("bp_1", 0),
        ("bp_2", 1),
        ("bp_3", 2),
        ("gd_1", 3),
        ("gd_2", 2),
        ("gd_3", 3),
        ("rc_1", 1),
        ("rc_2", 1),
        ("rc_3", 0),
    ]);
    let profile = build_profile(&answers);
    let d = profile.dimensions;

    assert!((d.emotional_clarity - 6.0 / 9.0).abs() < 1e-12);
    assert!((d.boundaries - 3.0 / 9.0).abs() < 1e-12);
    assert!((d.growth_mindset - 8.0 / 9.0).abs() < 1e-12);
    assert!((d.relationship_safety - 2.0 / 9.0).abs() < 1e-12);
    assert_eq!(d.boundaries, d.stress_management);

    for dimension in ProfileDimension::ALL {
        let value = d.get(dimension);
        assert!((0.0..=1.0).contains(&value), "{} out of range", dimension);
    }
}

#[test]
fn profile_dimensions_stay_in_range_across_samples() {
    for answers in sample_answer_sets() {
        let profile = build_profile(&answers);
        for dimension in ProfileDimension::ALL {
            let value = profile.dimensions.get(dimension);
            assert!(
                (0.0..=1.0).contains(&value),
                "{} = {} for {:?}",
                dimension,
                value,
                answers
            );
        }
        assert_eq!(
            profile.dimensions.boundaries, profile.dimensions.stress_management,
            "shared-source dimensions must stay identical"
        );
        assert!(!profile.summary.is_empty());
    }
}
