//! Fixed-length feature extraction.
//!
//! Converts an [`AnswerVector`] into a 26-dimension numeric representation
//! capturing three levels of signal:
//!
//! - **Base** (12): raw answer values in canonical question order
//! - **Thematic** (8): mean and population standard deviation per category
//! - **Pattern** (6): whole-respondent statistics (mean, spread, extremes,
//!   high/low intensity ratios)
//!
//! The concatenated vector is L2-normalized so that pairwise comparison
//! reduces to a plain dot product. Degenerate input (all answers zero)
//! yields the exact zero vector rather than a division blow-up.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerVector;
use crate::questions::{QuestionCategory, QUESTION_COUNT};

/// Total feature dimension: 12 base + 8 thematic + 6 pattern.
pub const FEATURE_DIM: usize = 26;

/// Norms at or below this are treated as zero during normalization.
///
/// Epsilon instead of an exact zero comparison to absorb floating-point
/// residue from the intermediate statistics.
pub const NORM_EPSILON: f64 = 1e-10;

/// High-intensity cutoff for the pattern ratios: values `>= 2` count as high.
const HIGH_INTENSITY_CUTOFF: f64 = 2.0;

/// Low-intensity cutoff for the pattern ratios: values `<= 1` count as low.
const LOW_INTENSITY_CUTOFF: f64 = 1.0;

/// An L2-normalized 26-dimension feature vector.
///
/// # Invariants
///
/// - Length is always exactly [`FEATURE_DIM`], regardless of how many
///   answers were missing from the source mapping.
/// - Euclidean norm is exactly 1 (within floating tolerance) or the vector
///   is exactly zero. No other norm is possible.
/// - No component is NaN or infinite: degenerate intermediate statistics
///   are replaced with 0.0 before they can propagate.
///
/// # Example
///
/// ```
/// use wellbeing_core::{AnswerVector, FeatureVector};
///
/// let features = FeatureVector::from_answers(&AnswerVector::new());
/// assert!(features.is_zero());
///
/// let mut answers = AnswerVector::new();
/// answers.insert("ack_1", 3);
/// let features = FeatureVector::from_answers(&answers);
/// assert!((features.norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    components: [f64; FEATURE_DIM],
}

impl FeatureVector {
    /// Derive the feature vector for a participant's answers.
    pub fn from_answers(answers: &AnswerVector) -> Self {
        let base = answers.canonical_values();

        let mut components = [0.0; FEATURE_DIM];
        components[..QUESTION_COUNT].copy_from_slice(&base);

        // Thematic block: (mean, std) per category, in canonical order.
        let mut offset = QUESTION_COUNT;
        for category in QuestionCategory::ALL {
            let values: Vec<f64> = category
                .question_ids()
                .iter()
                .map(|qid| f64::from(answers.value_of(qid)))
                .collect();
            components[offset] = mean(&values);
            components[offset + 1] = population_std(&values);
            offset += 2;
        }

        // Pattern block: whole-respondent statistics over the 12 base values.
        let high = base.iter().filter(|v| **v >= HIGH_INTENSITY_CUTOFF).count();
        let low = base.iter().filter(|v| **v <= LOW_INTENSITY_CUTOFF).count();
        components[offset] = mean(&base);
        components[offset + 1] = population_std(&base);
        components[offset + 2] = base.iter().cloned().fold(f64::MIN, f64::max);
        components[offset + 3] = base.iter().cloned().fold(f64::MAX, f64::min);
        components[offset + 4] = high as f64 / QUESTION_COUNT as f64;
        components[offset + 5] = low as f64 / QUESTION_COUNT as f64;

        // Scrub any residual non-finite value before normalization.
        for component in components.iter_mut() {
            if !component.is_finite() {
                *component = 0.0;
            }
        }

        Self { components }.normalized()
    }

    /// L2-normalize, collapsing near-zero norms to the exact zero vector.
    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > NORM_EPSILON {
            for component in self.components.iter_mut() {
                *component /= norm;
            }
        } else {
            self.components = [0.0; FEATURE_DIM];
        }
        self
    }

    /// Euclidean norm of the vector.
    pub fn norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Dot product with another feature vector.
    ///
    /// Because both vectors are unit-norm (or zero), this is the cosine
    /// similarity; a zero vector on either side yields 0.0, never NaN.
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// True when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|c| *c == 0.0)
    }

    /// True when every component is finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.components.iter().all(|c| c.is_finite())
    }

    /// The raw components in fixed order.
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

/// Arithmetic mean; 0.0 for empty input.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation with a NaN guard.
///
/// Fixed-size category slices can never be empty, but the guard keeps the
/// formula total over any input and replaces a NaN result with 0.0.
fn population_std(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    let std = variance.sqrt();
    if std.is_nan() {
        0.0
    } else {
        std
    }
}
