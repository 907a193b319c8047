//! Error types for the participant registry.
//!
//! Failure semantics are narrow by design: no registry operation raises on
//! malformed input beyond the guards in the core engine — the worst case
//! for a comparison is a degraded (exact-ratio-only) similarity rather
//! than a hard failure. The variants here cover lookups of unknown
//! participants and lock poisoning.

use thiserror::Error;

use wellbeing_core::CoreError;

/// Error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A requested participant was not found in the registry.
    ///
    /// # When This Occurs
    ///
    /// - Requesting a pair report for an id that never submitted
    /// - Looking up a participant after a reset
    #[error("Participant not found: {id}")]
    ParticipantNotFound {
        /// The participant id that was not found
        id: String,
    },

    /// The registry lock was poisoned by a panicking writer.
    ///
    /// Should never occur in normal operation — the engine does not panic
    /// on malformed input. Indicates a bug worth reporting.
    #[error("Registry lock poisoned: {0}")]
    LockPoisoned(String),

    /// An error propagated from the core engine (configuration or
    /// serialization boundary).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::ParticipantNotFound {
            id: "p-404".to_string(),
        };
        assert!(err.to_string().contains("p-404"));
    }

    #[test]
    fn test_core_error_passthrough() {
        let core = CoreError::ConfigError("bad".to_string());
        let err: RegistryError = core.into();
        assert!(err.to_string().contains("Configuration error"));
    }
}
