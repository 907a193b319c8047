//! Integration tests for the submission flow: compare-then-insert,
//! match listing, history, and concurrent submissions.

use std::sync::Arc;
use std::thread;

use wellbeing_core::questions::QUESTION_ORDER;
use wellbeing_core::{AnswerVector, LoggingConfig};
use wellbeing_registry::{build_profile, telemetry, InMemoryRegistry, ParticipantStore};

fn full_answers(value: u8) -> AnswerVector {
    AnswerVector::from_pairs(QUESTION_ORDER.iter().map(|qid| (qid.to_string(), value)))
}

fn varied_answers(seed: u8) -> AnswerVector {
    AnswerVector::from_pairs(
        QUESTION_ORDER
            .iter()
            .enumerate()
            .map(|(i, qid)| (qid.to_string(), (seed.wrapping_add(i as u8)) % 4)),
    )
}

#[test]
fn submission_flow_end_to_end() {
    telemetry::init(&LoggingConfig::default());
    let registry = InMemoryRegistry::new();

    // Three distinct participants, then a twin of the first.
    registry
        .submit_and_match("alpha", Some("Alpha"), varied_answers(0))
        .expect("alpha");
    registry
        .submit_and_match("beta", None, varied_answers(2))
        .expect("beta");
    registry
        .submit_and_match("gamma", None, full_answers(3))
        .expect("gamma");

    let outcome = registry
        .submit_and_match("delta", Some("Delta"), varied_answers(0))
        .expect("delta");

    assert_eq!(outcome.matches.len(), 1, "only the twin should match");
    assert_eq!(outcome.matches[0].participant_id, "alpha");
    assert_eq!(outcome.matches[0].participant_name, "Alpha");
    assert_eq!(outcome.matches[0].score, 1.0);

    // The standalone profile builder agrees with the stored profile.
    let direct = build_profile(&varied_answers(0));
    assert_eq!(outcome.profile, direct);

    // Insertion order is preserved in listings.
    let ids: Vec<String> = registry
        .participants()
        .expect("participants")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn pairwise_sweep_matches_submission_results() {
    let registry = InMemoryRegistry::new();
    registry
        .submit_and_match("a", None, full_answers(2))
        .expect("a");
    registry
        .submit_and_match("b", None, full_answers(2))
        .expect("b");
    registry
        .submit_and_match("c", None, {
            let mut answers = full_answers(2);
            answers.insert("rc_3", 0);
            answers
        })
        .expect("c");

    let pairs = registry.similar_pairs().expect("pairs");
    // a-b identical (1.0); a-c and b-c agree on 11/12, clearing 0.9.
    assert_eq!(pairs.len(), 3);
    for pair in &pairs {
        assert!(pair.score >= 0.9);
        assert_ne!(pair.participant_a, pair.participant_b);
    }

    // Each unordered pair appears exactly once.
    let mut keys: Vec<(String, String)> = pairs
        .iter()
        .map(|p| (p.participant_a.clone(), p.participant_b.clone()))
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 3);
}

#[test]
fn snapshot_history_is_append_only() {
    let registry = InMemoryRegistry::new();
    registry
        .submit_and_match("p", None, full_answers(1))
        .expect("first");
    registry
        .submit_and_match("p", None, full_answers(2))
        .expect("second");

    assert_eq!(registry.participant_count().expect("count"), 1);
    let snapshots = registry.snapshots().expect("snapshots");
    assert_eq!(snapshots.len(), 2, "one snapshot per submission");
    assert_eq!(snapshots[0].answers.value_of("ack_1"), 1);
    assert_eq!(snapshots[1].answers.value_of("ack_1"), 2);
}

#[test]
fn concurrent_submissions_serialize() {
    let registry = Arc::new(InMemoryRegistry::new());
    let mut handles = Vec::new();

    // 8 threads, each submitting a distinct twin of the same answer set.
    for t in 0..8u8 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            registry
                .submit_and_match(&format!("p-{}", t), None, full_answers(2))
                .expect("concurrent submit")
        }));
    }

    let mut total_matches = 0;
    for handle in handles {
        let outcome = handle.join().expect("thread");
        total_matches += outcome.matches.len();
    }

    // Submissions serialized under the write lock: whatever the ordering,
    // the i-th submission saw exactly i - 1 prior twins, so match counts
    // sum to 0 + 1 + ... + 7.
    assert_eq!(total_matches, 28);
    assert_eq!(registry.participant_count().expect("count"), 8);
    assert_eq!(registry.snapshot_count().expect("snapshots"), 8);
}

#[test]
fn reset_then_reuse() {
    let registry = InMemoryRegistry::new();
    registry
        .submit_and_match("p-1", None, full_answers(2))
        .expect("submit");
    registry.reset().expect("reset");

    // A fresh submission after reset sees an empty registry.
    let outcome = registry
        .submit_and_match("p-2", None, full_answers(2))
        .expect("resubmit");
    assert!(outcome.matches.is_empty());
    assert_eq!(registry.participant_count().expect("count"), 1);
}
