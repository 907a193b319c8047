//! The participant store: compare-then-insert orchestration.
//!
//! [`ParticipantStore`] is the seam consumed by the request-handling layer;
//! [`InMemoryRegistry`] is the process-lifetime implementation. All methods
//! are synchronous — nothing here blocks on I/O, and the work per call is
//! bounded by the participant count (low hundreds by design). For async
//! contexts, wrap calls in `spawn_blocking`.
//!
//! # Scaling boundary
//!
//! Submission compares against every stored participant (O(n)) and the
//! administrative sweep recomputes every pair (O(n²)). Both are acceptable
//! at the stated scale of ~200-250 participants; approximate nearest
//! neighbor indexing is explicitly deferred.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use wellbeing_core::similarity::{self, ScoreOutcome};
use wellbeing_core::{AnswerVector, EngineConfig, FeatureVector, Profile, SimilarityScore};

use crate::error::{RegistryError, RegistryResult};
use crate::record::{ParticipantRecord, ProfileSnapshot, SimilarPair, SimilarityMatch};

/// Result of one submission: the fresh profile plus all highly similar
/// prior participants, sorted by score descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Profile generated for the submitted answers.
    pub profile: Profile,
    /// Stored participants scoring at or above the match threshold,
    /// highest first. Never contains the submitting participant.
    pub matches: Vec<SimilarityMatch>,
}

/// Per-pair diagnostic produced by [`ParticipantStore::pair_report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    /// First participant id.
    pub participant_a: String,
    /// Second participant id.
    pub participant_b: String,
    /// Combined similarity score.
    pub score: SimilarityScore,
    /// Fraction of the 12 canonical questions answered identically.
    pub exact_ratio: f64,
    /// Count of identically answered canonical questions.
    pub matching_questions: usize,
    /// Total canonical questions considered (always 12).
    pub total_questions: usize,
    /// Whether the score reaches the match threshold.
    pub meets_threshold: bool,
}

/// Store seam consumed by the request-handling layer.
///
/// Implementations must serialize the whole compare-then-insert sequence
/// of [`ParticipantStore::submit_and_match`] so that concurrent
/// submissions always see each other as potential matches.
pub trait ParticipantStore: Send + Sync {
    /// Store a submission and return its profile plus highly similar
    /// prior participants.
    fn submit_and_match(
        &self,
        id: &str,
        name: Option<&str>,
        answers: AnswerVector,
    ) -> RegistryResult<SubmissionOutcome>;

    /// All unordered pairs of stored participants scoring at or above the
    /// match threshold. Recomputes every pair; O(n²).
    fn similar_pairs(&self) -> RegistryResult<Vec<SimilarPair>>;

    /// Similarity diagnostic for two stored participants.
    fn pair_report(&self, id_a: &str, id_b: &str) -> RegistryResult<PairReport>;

    /// A stored participant by id.
    fn get(&self, id: &str) -> RegistryResult<Option<ParticipantRecord>>;

    /// All stored participants in insertion order.
    fn participants(&self) -> RegistryResult<Vec<ParticipantRecord>>;

    /// Number of stored participants.
    fn participant_count(&self) -> RegistryResult<usize>;

    /// The append-only submission history, oldest first.
    fn snapshots(&self) -> RegistryResult<Vec<ProfileSnapshot>>;

    /// Number of stored snapshots.
    fn snapshot_count(&self) -> RegistryResult<usize>;

    /// Clear all participants and snapshots (administrative/testing).
    fn reset(&self) -> RegistryResult<()>;
}

/// Registry state guarded by the single lock.
#[derive(Debug, Default)]
struct RegistryState {
    /// Records in insertion order.
    participants: Vec<ParticipantRecord>,
    /// Participant id → position in `participants`.
    index: HashMap<String, usize>,
    /// Append-only submission history.
    snapshots: Vec<ProfileSnapshot>,
}

/// Process-lifetime in-memory registry.
///
/// Initialized empty at startup, discarded at process termination. One
/// `RwLock` guards the full state: submissions take the write lock for the
/// whole compare-then-insert sequence; read-only sweeps share the read
/// lock. Construct explicitly and inject where needed — this type is not a
/// singleton.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
    config: EngineConfig,
}

impl InMemoryRegistry {
    /// Create an empty registry with the default engine constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with custom engine thresholds.
    ///
    /// Validates the config; the match threshold must lie within [0, 1].
    pub fn with_config(config: EngineConfig) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self {
            state: RwLock::new(RegistryState::default()),
            config,
        })
    }

    /// The engine configuration this registry scores with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn score_pair(&self, a: &AnswerVector, b: &AnswerVector) -> ScoreOutcome {
        similarity::score_with_config(a, b, &self.config)
    }

    fn read_state(&self) -> RegistryResult<std::sync::RwLockReadGuard<'_, RegistryState>> {
        self.state
            .read()
            .map_err(|e| RegistryError::LockPoisoned(e.to_string()))
    }

    fn write_state(&self) -> RegistryResult<std::sync::RwLockWriteGuard<'_, RegistryState>> {
        self.state
            .write()
            .map_err(|e| RegistryError::LockPoisoned(e.to_string()))
    }
}

impl ParticipantStore for InMemoryRegistry {
    fn submit_and_match(
        &self,
        id: &str,
        name: Option<&str>,
        answers: AnswerVector,
    ) -> RegistryResult<SubmissionOutcome> {
        let features = FeatureVector::from_answers(&answers);
        let profile = Profile::from_answers(&answers);

        // The write lock spans comparison and insertion so concurrent
        // submissions serialize and always see each other.
        let mut state = self.write_state()?;

        let mut matches: Vec<SimilarityMatch> = Vec::new();
        for record in state.participants.iter().filter(|r| r.id != id) {
            let outcome = self.score_pair(&answers, &record.answers);
            debug!(
                new_id = %id,
                other_id = %record.id,
                score = outcome.score,
                method = ?outcome.method,
                "pairwise similarity"
            );
            if outcome.score >= self.config.match_threshold {
                matches.push(SimilarityMatch {
                    participant_id: record.id.clone(),
                    participant_name: record.display_name().to_string(),
                    score: outcome.score,
                });
            }
        }
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        let record =
            ParticipantRecord::new(id, name.map(String::from), answers, features, profile.clone());
        state.snapshots.push(ProfileSnapshot::from_record(&record));

        match state.index.get(id).copied() {
            // Resubmission: overwrite in place, keeping insertion position.
            Some(position) => state.participants[position] = record,
            None => {
                let position = state.participants.len();
                state.index.insert(id.to_string(), position);
                state.participants.push(record);
            }
        }

        info!(
            participant_id = %id,
            total_participants = state.participants.len(),
            match_count = matches.len(),
            "submission stored"
        );

        Ok(SubmissionOutcome { profile, matches })
    }

    fn similar_pairs(&self) -> RegistryResult<Vec<SimilarPair>> {
        let state = self.read_state()?;
        let mut pairs = Vec::new();

        for (i, a) in state.participants.iter().enumerate() {
            for b in state.participants.iter().skip(i + 1) {
                let outcome = self.score_pair(&a.answers, &b.answers);
                if outcome.score >= self.config.match_threshold {
                    pairs.push(SimilarPair {
                        participant_a: a.id.clone(),
                        participant_a_name: a.display_name().to_string(),
                        participant_b: b.id.clone(),
                        participant_b_name: b.display_name().to_string(),
                        score: outcome.score,
                    });
                }
            }
        }

        Ok(pairs)
    }

    fn pair_report(&self, id_a: &str, id_b: &str) -> RegistryResult<PairReport> {
        let state = self.read_state()?;
        let lookup = |id: &str| -> RegistryResult<&ParticipantRecord> {
            state
                .index
                .get(id)
                .and_then(|&position| state.participants.get(position))
                .ok_or_else(|| RegistryError::ParticipantNotFound { id: id.to_string() })
        };
        let a = lookup(id_a)?;
        let b = lookup(id_b)?;

        let outcome = self.score_pair(&a.answers, &b.answers);
        let exact = similarity::exact_ratio(&a.answers, &b.answers);
        let total = wellbeing_core::questions::QUESTION_COUNT;
        let matching = (exact * total as f64).round() as usize;

        Ok(PairReport {
            participant_a: a.id.clone(),
            participant_b: b.id.clone(),
            score: outcome.score,
            exact_ratio: exact,
            matching_questions: matching,
            total_questions: total,
            meets_threshold: outcome.score >= self.config.match_threshold,
        })
    }

    fn get(&self, id: &str) -> RegistryResult<Option<ParticipantRecord>> {
        let state = self.read_state()?;
        Ok(state
            .index
            .get(id)
            .and_then(|&position| state.participants.get(position))
            .cloned())
    }

    fn participants(&self) -> RegistryResult<Vec<ParticipantRecord>> {
        Ok(self.read_state()?.participants.clone())
    }

    fn participant_count(&self) -> RegistryResult<usize> {
        Ok(self.read_state()?.participants.len())
    }

    fn snapshots(&self) -> RegistryResult<Vec<ProfileSnapshot>> {
        Ok(self.read_state()?.snapshots.clone())
    }

    fn snapshot_count(&self) -> RegistryResult<usize> {
        Ok(self.read_state()?.snapshots.len())
    }

    fn reset(&self) -> RegistryResult<()> {
        let mut state = self.write_state()?;
        let cleared = state.participants.len();
        state.participants.clear();
        state.index.clear();
        state.snapshots.clear();
        info!(cleared_participants = cleared, "registry reset");
        Ok(())
    }
}
