//! Configuration loading — TOML embedded at build time.
//!
//! The dashboard runs in the browser, with no filesystem and no
//! environment, so `smarthome.toml` is compiled in. Every field has a
//! sensible default so any section may be omitted.

use serde::Deserialize;
use smarthome_domain::lights::LightsState;

/// Contents of `smarthome.toml`.
const EMBEDDED: &str = include_str!("../smarthome.toml");

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Light settings.
    pub lights: LightsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Initial light layout.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    /// One flag per light, in grid order.
    pub initial: Vec<bool>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl DashboardConfig {
    /// Parse and validate the embedded `smarthome.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded file is malformed or invalid.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for semantically invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lights.initial.is_empty() {
            return Err(ConfigError::Validation(
                "at least one light must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// The state the dashboard starts from.
    #[must_use]
    pub fn initial_state(&self) -> LightsState {
        LightsState::new(self.lights.initial.clone())
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            initial: vec![false, false, true],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthome=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
