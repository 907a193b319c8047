//! Pairwise similarity scoring.
//!
//! Compares two participants' answer sets and produces one similarity score
//! in `[0, 1]` by blending two signals:
//!
//! - **Exact ratio**: fraction of the 12 canonical questions where both
//!   participants gave identical answers (missing answers read as 0).
//! - **Cosine similarity**: dot product of the two unit-norm feature
//!   vectors, measuring directional (pattern) agreement independent of
//!   magnitude.
//!
//! The blend is adaptive: when raw answers already agree on at least 90% of
//! questions the literal agreement is trusted more heavily; otherwise the
//! pattern-level signal leads, which can surface participants who differ in
//! specific answers but share an overall behavioral shape.
//!
//! When the pattern term cannot be trusted (non-finite features, NaN
//! cosine), the scorer degrades to the exact ratio instead of failing the
//! request. The degradation is explicit in [`ScoreOutcome::method`] and
//! surfaced via `tracing::warn!`, even though the numeric contract toward
//! callers stays a single `[0, 1]` score.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::answers::AnswerVector;
use crate::config::EngineConfig;
use crate::features::FeatureVector;
use crate::questions::{QUESTION_COUNT, QUESTION_ORDER};

/// A combined similarity score clamped to `[0, 1]`.
pub type SimilarityScore = f64;

/// Exact-ratio cutoff above which literal agreement outweighs the pattern
/// signal in the blend.
pub const HIGH_AGREEMENT_CUTOFF: f64 = 0.9;

/// Weight of the leading signal in the adaptive blend.
pub const DOMINANT_WEIGHT: f64 = 0.6;

/// Similarity at or above this marks two participants as highly similar.
pub const MATCH_THRESHOLD: f64 = 0.9;

/// How a similarity score was produced.
///
/// Callers that only need the number can ignore this; the registry logs it
/// so degraded comparisons stay observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreMethod {
    /// Full pipeline: adaptive blend of exact ratio and cosine similarity.
    Combined,
    /// Pattern term was unusable; the exact ratio stood in for it.
    DegradedExactOnly {
        /// Why the pattern term was discarded.
        reason: DegradedReason,
    },
}

/// Why a comparison fell back to the exact ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    /// A feature vector contained a non-finite component.
    NonFiniteFeatures,
    /// The cosine of the two feature vectors evaluated to NaN.
    NanCosine,
}

impl std::fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegradedReason::NonFiniteFeatures => write!(f, "non-finite feature vector"),
            DegradedReason::NanCosine => write!(f, "NaN cosine similarity"),
        }
    }
}

/// A similarity score together with the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Combined similarity, clamped to `[0, 1]`.
    pub score: SimilarityScore,
    /// Full blend or degraded fallback.
    pub method: ScoreMethod,
}

/// Fraction of the 12 canonical questions on which both participants agree.
///
/// Missing answers are read as 0 on both sides, so two participants who
/// each skipped the same question agree on it. Symmetric by construction.
pub fn exact_ratio(a: &AnswerVector, b: &AnswerVector) -> f64 {
    let matches = QUESTION_ORDER
        .iter()
        .filter(|qid| a.value_of(qid) == b.value_of(qid))
        .count();
    matches as f64 / QUESTION_COUNT as f64
}

/// Compute the combined similarity score with the default engine constants.
///
/// See [`score_with_config`] for the full pipeline description.
pub fn score(a: &AnswerVector, b: &AnswerVector) -> SimilarityScore {
    score_outcome(a, b).score
}

/// Compute the combined similarity and report how it was produced, using
/// the default engine constants.
pub fn score_outcome(a: &AnswerVector, b: &AnswerVector) -> ScoreOutcome {
    score_with_config(a, b, &EngineConfig::default())
}

/// Compute the combined similarity score between two answer sets.
///
/// # Pipeline
///
/// 1. Identical answers on all 12 questions short-circuit to exactly 1.0 —
///    no feature extraction, no floating-point noise.
/// 2. Otherwise the cosine of the two unit-norm feature vectors supplies
///    the pattern term; a zero vector on either side yields cosine 0.
/// 3. If either feature vector carries a non-finite component, or the
///    cosine itself is NaN, the exact ratio stands in for the pattern term
///    (degraded path, logged at `warn`).
/// 4. Adaptive blend: exact ratio at or above
///    [`EngineConfig::high_agreement_cutoff`] puts the dominant weight on
///    the exact ratio; below it, on the pattern term.
/// 5. The blend is clamped to `[0, 1]`; a mathematically negative cosine
///    counts as "no similarity".
///
/// No side effects beyond tracing events. Symmetric in its arguments.
pub fn score_with_config(a: &AnswerVector, b: &AnswerVector, config: &EngineConfig) -> ScoreOutcome {
    let exact = exact_ratio(a, b);

    // Identical answers: trivially a perfect match.
    if exact >= 1.0 {
        return ScoreOutcome {
            score: 1.0,
            method: ScoreMethod::Combined,
        };
    }

    let features_a = FeatureVector::from_answers(a);
    let features_b = FeatureVector::from_answers(b);

    let (pattern, method) = if !features_a.is_finite() || !features_b.is_finite() {
        warn!(
            exact_ratio = exact,
            reason = %DegradedReason::NonFiniteFeatures,
            "similarity degraded to exact ratio"
        );
        (
            exact,
            ScoreMethod::DegradedExactOnly {
                reason: DegradedReason::NonFiniteFeatures,
            },
        )
    } else {
        let cosine = features_a.dot(&features_b);
        if cosine.is_nan() {
            warn!(
                exact_ratio = exact,
                reason = %DegradedReason::NanCosine,
                "similarity degraded to exact ratio"
            );
            (
                exact,
                ScoreMethod::DegradedExactOnly {
                    reason: DegradedReason::NanCosine,
                },
            )
        } else {
            (cosine, ScoreMethod::Combined)
        }
    };

    let dominant = config.exact_weight_dominant;
    let secondary = 1.0 - dominant;
    let combined = if exact >= config.high_agreement_cutoff {
        dominant * exact + secondary * pattern
    } else {
        dominant * pattern + secondary * exact
    };

    ScoreOutcome {
        score: combined.clamp(0.0, 1.0),
        method,
    }
}
