//! The fixed questionnaire layout.
//!
//! Every participant answers the same 12 multiple-choice questions, three
//! per category. The canonical question order defined here is load-bearing:
//! feature vectors ([`crate::features`]) place the raw answer values in this
//! order, and the exact-match ratio ([`crate::similarity::exact_ratio`])
//! iterates it with missing answers read as 0.
//!
//! Question ids must match the frontend question_ids exactly.

use serde::{Deserialize, Serialize};

/// Number of questions in the fixed questionnaire.
pub const QUESTION_COUNT: usize = 12;

/// Highest option value a question can carry (options are 0..=3).
///
/// Out-of-range values are not rejected here — that is the request
/// validation layer's boundary. The numeric formulas stay total over any
/// `u8` input and will simply produce skewed results for invalid values.
pub const OPTION_MAX: u8 = 3;

/// Canonical question order for consistent vectorization.
pub const QUESTION_ORDER: [&str; QUESTION_COUNT] = [
    "ack_1", "ack_2", "ack_3", // Acknowledgement
    "bp_1", "bp_2", "bp_3", // Boundaries & Priorities
    "gd_1", "gd_2", "gd_3", // Growth & Direction
    "rc_1", "rc_2", "rc_3", // Relationships & Communication
];

/// Thematic category of a questionnaire question.
///
/// Each category owns exactly 3 questions. Categories drive the thematic
/// feature block (per-category mean/std) and the profile dimension sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    /// Acknowledgement of one's own emotional state (`ack_*`).
    Acknowledgement,
    /// Boundaries & priorities (`bp_*`).
    Boundaries,
    /// Growth & direction (`gd_*`).
    Growth,
    /// Relationships & communication (`rc_*`).
    Relationships,
}

impl QuestionCategory {
    /// All categories in canonical order.
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::Acknowledgement,
        QuestionCategory::Boundaries,
        QuestionCategory::Growth,
        QuestionCategory::Relationships,
    ];

    /// The three question ids belonging to this category, in canonical order.
    pub const fn question_ids(&self) -> [&'static str; 3] {
        match self {
            QuestionCategory::Acknowledgement => ["ack_1", "ack_2", "ack_3"],
            QuestionCategory::Boundaries => ["bp_1", "bp_2", "bp_3"],
            QuestionCategory::Growth => ["gd_1", "gd_2", "gd_3"],
            QuestionCategory::Relationships => ["rc_1", "rc_2", "rc_3"],
        }
    }

    /// Look up the category a question id belongs to.
    ///
    /// Returns `None` for ids outside the fixed set; such ids are retained
    /// in an [`crate::AnswerVector`] but ignored by every numeric consumer.
    pub fn of(question_id: &str) -> Option<QuestionCategory> {
        for category in Self::ALL {
            if category.question_ids().contains(&question_id) {
                return Some(category);
            }
        }
        None
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionCategory::Acknowledgement => write!(f, "acknowledgement"),
            QuestionCategory::Boundaries => write!(f, "boundaries"),
            QuestionCategory::Growth => write!(f, "growth"),
            QuestionCategory::Relationships => write!(f, "relationships"),
        }
    }
}

/// Check whether a question id belongs to the fixed canonical set.
pub fn is_known_question(question_id: &str) -> bool {
    QUESTION_ORDER.contains(&question_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_covers_all_categories() {
        let mut from_categories = Vec::new();
        for category in QuestionCategory::ALL {
            from_categories.extend(category.question_ids());
        }
        assert_eq!(from_categories, QUESTION_ORDER.to_vec());
        println!("[PASS] Category layout matches canonical question order");
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(
            QuestionCategory::of("bp_2"),
            Some(QuestionCategory::Boundaries)
        );
        assert_eq!(QuestionCategory::of("rc_3"), Some(QuestionCategory::Relationships));
        assert_eq!(QuestionCategory::of("unknown_9"), None);
    }

    #[test]
    fn test_known_question_set() {
        for qid in QUESTION_ORDER {
            assert!(is_known_question(qid), "{} should be known", qid);
        }
        assert!(!is_known_question("ack_4"));
        assert!(!is_known_question(""));
    }
}
