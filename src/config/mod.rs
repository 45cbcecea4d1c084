//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `PITCHPERFECT` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use pitchperfect_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod coaching;
mod detection;
mod error;

pub use coaching::CoachingConfig;
pub use detection::DetectionConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
///
/// Every field has a sensible default, so `AppConfig::default()` is a
/// fully working configuration and the environment only overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Classifier tuning (threshold, saturation).
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Feedback rendering and selection tuning.
    #[serde(default)]
    pub coaching: CoachingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variable Format
    ///
    /// - `PITCHPERFECT__DETECTION__OBJECTION_THRESHOLD=0.4`
    /// - `PITCHPERFECT__COACHING__RESPONSE_SEED=42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PITCHPERFECT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.detection.validate()?;
        self.coaching.validate()?;
        Ok(())
    }
}
