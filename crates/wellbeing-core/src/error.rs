//! Error types for wellbeing-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the wellbeing-core crate, along with the [`CoreResult<T>`] type alias.
//!
//! The taxonomy is deliberately narrow: the engine favors graceful
//! degradation over failure. Missing answers default to 0, degenerate
//! feature vectors collapse to the zero vector, and non-finite intermediate
//! values are replaced before they can propagate. Errors here cover the
//! configuration surface and serialization boundaries only.

use thiserror::Error;

/// Top-level error type for wellbeing-core operations.
///
/// # Examples
///
/// ```rust
/// use wellbeing_core::CoreError;
///
/// let error = CoreError::ValidationError {
///     field: "match_threshold".to_string(),
///     message: "must be within [0, 1]".to_string(),
/// };
/// assert!(error.to_string().contains("match_threshold"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration is invalid or missing.
    ///
    /// # When This Occurs
    ///
    /// - Missing or unreadable configuration file
    /// - Invalid configuration value format
    /// - Environment variable parsing failure
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A field value failed validation constraints.
    ///
    /// # When This Occurs
    ///
    /// - Threshold or weight outside the [0, 1] range
    /// - Empty value for a required string field
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Error during serialization or deserialization.
    ///
    /// # When This Occurs
    ///
    /// - JSON encoding failure at the API boundary
    /// - Corrupted stored data handed back by a caller
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
