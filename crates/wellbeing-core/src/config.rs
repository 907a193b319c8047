//! Configuration management for the well-being engine.
//!
//! Configuration is loaded in order:
//! 1. `config/default.toml` (base settings)
//! 2. `config/{WELLBEING_ENV}.toml` (environment-specific)
//! 3. Environment variables with `WELLBEING` prefix (`__` separator)
//!
//! The engine constants (thresholds, blend weights) default to the
//! contractual values from [`crate::similarity`]; the config surface exists
//! so a deployment can tune the match threshold without a rebuild.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::similarity::{DOMINANT_WEIGHT, HIGH_AGREEMENT_CUTOFF, MATCH_THRESHOLD};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Engine thresholds and blend weights.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging verbosity and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("WELLBEING_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("WELLBEING").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Configuration with defaults for testing/development.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        self.engine.validate()?;
        self.logging.validate()
    }
}

/// Engine thresholds and blend weights.
///
/// Defaults are the contractual constants; `match_threshold` is exposed for
/// a future configurable surface but fixed at 0.9 in this core.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Similarity at or above this marks two participants as highly
    /// similar (inclusive boundary). Default: 0.9.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// Exact-ratio cutoff above which literal agreement leads the blend.
    /// Default: 0.9.
    #[serde(default = "default_high_agreement_cutoff")]
    pub high_agreement_cutoff: f64,

    /// Weight of the leading signal in the adaptive blend; the trailing
    /// signal takes the complement. Default: 0.6.
    #[serde(default = "default_dominant_weight")]
    pub exact_weight_dominant: f64,
}

fn default_match_threshold() -> f64 {
    MATCH_THRESHOLD
}

fn default_high_agreement_cutoff() -> f64 {
    HIGH_AGREEMENT_CUTOFF
}

fn default_dominant_weight() -> f64 {
    DOMINANT_WEIGHT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            high_agreement_cutoff: HIGH_AGREEMENT_CUTOFF,
            exact_weight_dominant: DOMINANT_WEIGHT,
        }
    }
}

impl EngineConfig {
    /// Validate that every threshold and weight lies within [0, 1].
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("engine.match_threshold", self.match_threshold),
            ("engine.high_agreement_cutoff", self.high_agreement_cutoff),
            ("engine.exact_weight_dominant", self.exact_weight_dominant),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(CoreError::ValidationError {
                    field: field.to_string(),
                    message: format!("must be within [0, 1], got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> CoreResult<()> {
        if self.level.trim().is_empty() {
            return Err(CoreError::ValidationError {
                field: "logging.level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
