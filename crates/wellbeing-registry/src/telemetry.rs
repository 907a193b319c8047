//! Tracing subscriber setup for binaries and tests that embed the registry.
//!
//! The engine surfaces degraded similarity computations and per-comparison
//! scores as tracing events; installing a subscriber makes them visible.
//! `RUST_LOG` overrides the configured level when set.

use tracing_subscriber::EnvFilter;

use wellbeing_core::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Idempotent: a second call (e.g. from another test) is a no-op rather
/// than a panic.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
