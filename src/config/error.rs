//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Objection threshold must be in (0.0, 1.0]")]
    InvalidThreshold,

    #[error("Saturation must be a positive finite number")]
    InvalidSaturation,

    #[error("Feedback length cap is too small to render any template")]
    FeedbackCapTooSmall,
}
