//! Well-being Participant Registry
//!
//! Process-lifetime store for participant submissions. On every submission
//! the new answer set is compared against all prior participants; matches
//! at or above the similarity threshold are returned alongside the fresh
//! profile, and the record is appended to the registry.
//!
//! The registry is the sole shared mutable resource in the system. The
//! whole compare-then-insert sequence runs under one write lock so that
//! concurrent submissions serialize, always see each other as potential
//! matches, and keep insertion order well-defined. The engine itself
//! (`wellbeing-core`) is pure computation and needs no synchronization.
//!
//! The registry is explicitly constructed and dependency-injected — there
//! is no module-level singleton. It starts empty and is discarded at
//! process termination; nothing persists across restarts.
//!
//! # Example
//!
//! ```
//! use wellbeing_core::AnswerVector;
//! use wellbeing_registry::{InMemoryRegistry, ParticipantStore};
//!
//! let registry = InMemoryRegistry::new();
//! let mut answers = AnswerVector::new();
//! answers.insert("ack_1", 2);
//!
//! let outcome = registry.submit_and_match("p-1", None, answers).unwrap();
//! assert!(outcome.matches.is_empty(), "first participant has no peers");
//! ```

pub mod error;
pub mod record;
pub mod store;
pub mod telemetry;

// Re-exports for convenience
pub use error::{RegistryError, RegistryResult};
pub use record::{ParticipantRecord, ProfileSnapshot, SimilarPair, SimilarityMatch};
pub use store::{InMemoryRegistry, PairReport, ParticipantStore, SubmissionOutcome};

// The pure profile entry point, re-exported so the request-handling layer
// depends on one crate.
pub use wellbeing_core::build_profile;
