//! Canonical answer representation.
//!
//! [`AnswerVector`] is the normalized form of a participant's raw answers:
//! a mapping from question id to the integer option value they chose. All
//! downstream consumers (feature extraction, similarity, profiling) read
//! from this mapping and treat missing questions as value 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::questions::{QUESTION_COUNT, QUESTION_ORDER};

/// A participant's answers as a canonical question-id → option-value map.
///
/// # Construction policy
///
/// - Duplicate question ids in the input sequence: **last value wins**.
/// - Unknown question ids (outside the fixed set) are retained in the
///   mapping but ignored by all numeric consumers.
/// - Missing question ids are not an error; [`AnswerVector::value_of`]
///   reads them as 0.
///
/// Iteration order is deterministic (sorted by question id), which keeps
/// serialized forms stable across runs.
///
/// # Example
///
/// ```
/// use wellbeing_core::AnswerVector;
///
/// let answers = AnswerVector::from_pairs([
///     ("ack_1".to_string(), 1),
///     ("ack_1".to_string(), 2), // last value wins
/// ]);
/// assert_eq!(answers.value_of("ack_1"), 2);
/// assert_eq!(answers.value_of("ack_2"), 0); // missing reads as 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerVector {
    values: BTreeMap<String, u8>,
}

impl AnswerVector {
    /// Create an empty answer vector.
    ///
    /// Valid input: every consumer reads the 12 canonical questions as 0,
    /// so an empty vector produces the all-zero feature vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the canonical mapping from an ordered `(question_id, value)`
    /// sequence. Duplicate ids: last value wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u8)>,
    {
        let mut values = BTreeMap::new();
        for (question_id, value) in pairs {
            values.insert(question_id, value);
        }
        Self { values }
    }

    /// Insert or overwrite a single answer.
    pub fn insert(&mut self, question_id: impl Into<String>, value: u8) {
        self.values.insert(question_id.into(), value);
    }

    /// The recorded value for a question, defaulting to 0 when absent.
    pub fn value_of(&self, question_id: &str) -> u8 {
        self.values.get(question_id).copied().unwrap_or(0)
    }

    /// The recorded value for a question, `None` when absent.
    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.values.get(question_id).copied()
    }

    /// The 12 canonical answer values in fixed question order, missing
    /// questions read as 0. Unknown ids never appear here.
    pub fn canonical_values(&self) -> [f64; QUESTION_COUNT] {
        let mut base = [0.0; QUESTION_COUNT];
        for (slot, qid) in base.iter_mut().zip(QUESTION_ORDER) {
            *slot = f64::from(self.value_of(qid));
        }
        base
    }

    /// Number of recorded answers, unknown ids included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no answers were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the recorded `(question_id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.values.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl FromIterator<(String, u8)> for AnswerVector {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
