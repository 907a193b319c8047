//! Well-being Core Library
//!
//! Provides the similarity and profiling engine for multiple-choice
//! well-being questionnaires:
//!
//! - Canonical answer representation ([`AnswerVector`])
//! - Fixed 26-dimension feature extraction ([`FeatureVector`])
//! - Pairwise similarity scoring ([`similarity::score`])
//! - Per-participant profile generation ([`Profile`])
//! - Error types and configuration structures
//!
//! Everything in this crate is pure computation over inputs it does not
//! retain: no I/O, no shared state, no internal synchronization. The
//! process-lifetime participant registry lives in `wellbeing-registry`.
//!
//! # Example
//!
//! ```
//! use wellbeing_core::{build_profile, AnswerVector};
//!
//! let answers = AnswerVector::from_pairs([
//!     ("ack_1".to_string(), 2),
//!     ("ack_2".to_string(), 3),
//!     ("ack_3".to_string(), 1),
//! ]);
//! let profile = build_profile(&answers);
//! assert!((profile.dimensions.emotional_clarity - 6.0 / 9.0).abs() < 1e-12);
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod features;
pub mod profile;
pub mod questions;
pub mod similarity;

// Re-exports for convenience
pub use answers::AnswerVector;
pub use config::{Config, EngineConfig, LoggingConfig};
pub use error::{CoreError, CoreResult};
pub use features::{FeatureVector, FEATURE_DIM};
pub use profile::{build_profile, DimensionScores, Profile, ProfileDimension};
pub use similarity::{ScoreMethod, ScoreOutcome, SimilarityScore};
