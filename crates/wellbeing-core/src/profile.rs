//! Rule-based well-being profile generation.
//!
//! Aggregates a participant's answers into five named dimensions, each
//! normalized to `[0, 1]`, and derives a short human-readable summary from
//! a fixed threshold table.
//!
//! The dimensions are not mutually exclusive: `stress_management` and
//! `boundaries` are both fed from the boundaries-category answers. That
//! overlap is intentional feature design and is preserved exactly — the
//! two dimensions are always numerically identical.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerVector;
use crate::questions::QuestionCategory;

/// Theoretical maximum raw sum per dimension: option max 3 × 3 questions.
pub const DIMENSION_MAX_SCORE: f64 = 9.0;

/// Normalized value at or above this produces the affirming summary line.
///
/// Contractual constant: a reimplementation must use exactly 0.7.
pub const SUMMARY_HIGH: f64 = 0.7;

/// Normalized value at or below this produces the growth-oriented line.
///
/// Contractual constant: a reimplementation must use exactly 0.3.
pub const SUMMARY_LOW: f64 = 0.3;

/// Fallback sentence when no dimension crosses either threshold.
const MIXED_SUMMARY: &str = "Your responses suggest a mix of strengths and growth areas \
     across emotions, boundaries, stress, and relationships.";

/// The five named well-being dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileDimension {
    /// Awareness and reflection on one's own emotional state.
    EmotionalClarity,
    /// Recognizing stress patterns and having strategies to cope.
    StressManagement,
    /// Growth through self-reflection and change.
    GrowthMindset,
    /// Protecting one's time, energy, and peace.
    Boundaries,
    /// Safety and support in personal connections.
    RelationshipSafety,
}

impl ProfileDimension {
    /// All dimensions in summary-generation order.
    pub const ALL: [ProfileDimension; 5] = [
        ProfileDimension::EmotionalClarity,
        ProfileDimension::StressManagement,
        ProfileDimension::GrowthMindset,
        ProfileDimension::Boundaries,
        ProfileDimension::RelationshipSafety,
    ];

    /// The wire name of this dimension (matches the serialized form).
    pub const fn name(&self) -> &'static str {
        match self {
            ProfileDimension::EmotionalClarity => "emotional_clarity",
            ProfileDimension::StressManagement => "stress_management",
            ProfileDimension::GrowthMindset => "growth_mindset",
            ProfileDimension::Boundaries => "boundaries",
            ProfileDimension::RelationshipSafety => "relationship_safety",
        }
    }

    /// Summary sentence when the dimension scores at or above
    /// [`SUMMARY_HIGH`].
    const fn affirming_statement(&self) -> &'static str {
        match self {
            ProfileDimension::EmotionalClarity => {
                "You show strong emotional awareness and reflection."
            }
            ProfileDimension::StressManagement => {
                "You tend to recognize patterns in your stress and have some strategies to cope."
            }
            ProfileDimension::GrowthMindset => {
                "You seem to be growing a lot through self-reflection and change."
            }
            ProfileDimension::Boundaries => {
                "You are actively thinking about protecting your time, energy, and peace."
            }
            ProfileDimension::RelationshipSafety => {
                "Safe and supportive connections seem important and present in your life."
            }
        }
    }

    /// Summary sentence when the dimension scores at or below
    /// [`SUMMARY_LOW`].
    const fn growth_statement(&self) -> &'static str {
        match self {
            ProfileDimension::EmotionalClarity => {
                "You may be in a phase where your inner world feels unclear or heavy."
            }
            ProfileDimension::StressManagement => {
                "Stress may be building up in ways that are hard to manage sustainably."
            }
            ProfileDimension::GrowthMindset => {
                "You might be feeling a bit stuck or unsure about your direction right now."
            }
            ProfileDimension::Boundaries => {
                "There may be opportunities to set gentler boundaries for yourself."
            }
            ProfileDimension::RelationshipSafety => {
                "You may be craving deeper understanding and safety in relationships."
            }
        }
    }
}

impl std::fmt::Display for ProfileDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized `[0, 1]` scores for the five dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Fed from the acknowledgement-category answers.
    pub emotional_clarity: f64,
    /// Fed from the boundaries-category answers (shared with `boundaries`).
    pub stress_management: f64,
    /// Fed from the growth-category answers.
    pub growth_mindset: f64,
    /// Fed from the boundaries-category answers (shared with
    /// `stress_management`).
    pub boundaries: f64,
    /// Fed from the relationships-category answers.
    pub relationship_safety: f64,
}

impl DimensionScores {
    /// The value of a dimension by name.
    pub fn get(&self, dimension: ProfileDimension) -> f64 {
        match dimension {
            ProfileDimension::EmotionalClarity => self.emotional_clarity,
            ProfileDimension::StressManagement => self.stress_management,
            ProfileDimension::GrowthMindset => self.growth_mindset,
            ProfileDimension::Boundaries => self.boundaries,
            ProfileDimension::RelationshipSafety => self.relationship_safety,
        }
    }
}

/// A participant's well-being profile: dimension scores plus summary text.
///
/// # Example
///
/// ```
/// use wellbeing_core::{AnswerVector, Profile};
///
/// let mut answers = AnswerVector::new();
/// for qid in ["gd_1", "gd_2", "gd_3"] {
///     answers.insert(qid, 3);
/// }
/// let profile = Profile::from_answers(&answers);
/// assert_eq!(profile.dimensions.growth_mindset, 1.0);
/// assert!(profile.summary.contains("growing"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Normalized per-dimension scores.
    pub dimensions: DimensionScores,
    /// Human-readable summary derived from the threshold table.
    pub summary: String,
}

impl Profile {
    /// Generate the profile for a participant's answers.
    ///
    /// Raw sums accumulate per the fixed question→dimension mapping, each
    /// normalized by [`DIMENSION_MAX_SCORE`]. The summary joins one
    /// sentence per dimension that crosses a threshold, in dimension
    /// order; when none does, a single mixed-picture sentence stands in.
    pub fn from_answers(answers: &AnswerVector) -> Self {
        let category_sum = |category: QuestionCategory| -> f64 {
            category
                .question_ids()
                .iter()
                .map(|qid| f64::from(answers.value_of(qid)))
                .sum()
        };

        let boundaries_sum = category_sum(QuestionCategory::Boundaries);
        let dimensions = DimensionScores {
            emotional_clarity: category_sum(QuestionCategory::Acknowledgement)
                / DIMENSION_MAX_SCORE,
            // Boundaries answers feed both dimensions by design.
            stress_management: boundaries_sum / DIMENSION_MAX_SCORE,
            boundaries: boundaries_sum / DIMENSION_MAX_SCORE,
            growth_mindset: category_sum(QuestionCategory::Growth) / DIMENSION_MAX_SCORE,
            relationship_safety: category_sum(QuestionCategory::Relationships)
                / DIMENSION_MAX_SCORE,
        };

        let mut parts: Vec<&'static str> = Vec::new();
        for dimension in ProfileDimension::ALL {
            let value = dimensions.get(dimension);
            if value >= SUMMARY_HIGH {
                parts.push(dimension.affirming_statement());
            } else if value <= SUMMARY_LOW {
                parts.push(dimension.growth_statement());
            }
        }
        if parts.is_empty() {
            parts.push(MIXED_SUMMARY);
        }

        Self {
            dimensions,
            summary: parts.join(" "),
        }
    }
}

/// Generate a profile for a raw answer mapping.
///
/// Pure function used by the request-handling layer to render an immediate
/// response without touching the participant registry.
pub fn build_profile(answers: &AnswerVector) -> Profile {
    Profile::from_answers(answers)
}
