//! Tracing subscriber initialization.
//!
//! Called once by the embedding application before any DataRoom component
//! is constructed. `RUST_LOG` overrides the configured level.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from logging configuration.
///
/// Repeated calls are harmless: only the first registration wins.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
                .ok();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
                .ok();
        }
    }
}
