//! Registry record types.
//!
//! - [`ParticipantRecord`] — one stored participant: answers, profile,
//!   feature vector, creation timestamp.
//! - [`SimilarityMatch`] — one highly similar peer returned by a submission.
//! - [`SimilarPair`] — one pair from the administrative pairwise sweep.
//! - [`ProfileSnapshot`] — append-only submission history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wellbeing_core::{AnswerVector, FeatureVector, Profile, SimilarityScore};

/// A stored participant.
///
/// Created once per submission and never mutated in place; a resubmission
/// under the same id replaces the stored record wholesale. The registry
/// exclusively owns the collection of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Unique participant id, immutable after creation.
    pub id: String,

    /// Optional display name; [`ParticipantRecord::display_name`] falls
    /// back to the id.
    pub name: Option<String>,

    /// Canonical answer mapping retained for future comparisons.
    pub answers: AnswerVector,

    /// The 26-dimension feature vector derived from the answers.
    pub features: FeatureVector,

    /// The generated well-being profile.
    pub profile: Profile,

    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl ParticipantRecord {
    /// Create a record timestamped now.
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        answers: AnswerVector,
        features: FeatureVector,
        profile: Profile,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            answers,
            features,
            profile,
            created_at: Utc::now(),
        }
    }

    /// Display name for listings: the given name, or the id when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// One highly similar peer, returned from a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    /// Id of the matched (previously stored) participant.
    pub participant_id: String,
    /// Display name of the matched participant.
    pub participant_name: String,
    /// Combined similarity score, at or above the match threshold.
    pub score: SimilarityScore,
}

/// One pair of highly similar participants from the pairwise sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPair {
    /// Id of the earlier-inserted participant.
    pub participant_a: String,
    /// Display name of the earlier-inserted participant.
    pub participant_a_name: String,
    /// Id of the later-inserted participant.
    pub participant_b: String,
    /// Display name of the later-inserted participant.
    pub participant_b_name: String,
    /// Combined similarity score, at or above the match threshold.
    pub score: SimilarityScore,
}

/// One entry of the append-only submission history.
///
/// Snapshots accumulate across resubmissions: overwriting a participant's
/// record still appends a fresh snapshot, preserving the full history for
/// later comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Id of the submitting participant.
    pub participant_id: String,
    /// Display name at submission time.
    pub participant_name: String,
    /// The answers as submitted.
    pub answers: AnswerVector,
    /// The profile generated for this submission.
    pub profile: Profile,
    /// The feature vector derived for this submission.
    pub features: FeatureVector,
    /// When the submission happened.
    pub created_at: DateTime<Utc>,
}

impl ProfileSnapshot {
    /// Snapshot the state of a freshly built record.
    pub fn from_record(record: &ParticipantRecord) -> Self {
        Self {
            participant_id: record.id.clone(),
            participant_name: record.display_name().to_string(),
            answers: record.answers.clone(),
            profile: record.profile.clone(),
            features: record.features.clone(),
            created_at: record.created_at,
        }
    }
}
