// src/logging.rs

//! Native tracing subscriber setup
//!
//! The browser build logs through `tracing-wasm` from the wasm entry point;
//! this module covers the desktop binary. `RUST_LOG` wins over the configured
//! level when it is set and parses.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Error, Result};

/// Builds the level filter, preferring `RUST_LOG` over `config.level`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        Error::config_key("logging.level", format!("Invalid log filter '{}': {}", config.level, e))
    })
}

/// Installs the global subscriber. Returns `Ok(false)` when one was already
/// installed, so calling twice is harmless.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(config)?;

    let console_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(config.show_target)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(config.show_target)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(config.show_target)
            .boxed(),
    };

    let installed = Registry::default()
        .with(filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized at level {}", config.level);
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_builds_filter() {
        let config = LoggingConfig {
            level: "reon=debug,warn".to_string(),
            ..LoggingConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };

        assert!(init(&config).is_ok());
        // second install cannot replace the global subscriber
        assert_eq!(init(&config).unwrap(), false);
    }
}
