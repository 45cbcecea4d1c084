//! Feedback rendering and selection configuration.

use serde::Deserialize;

use crate::domain::coaching::{DEFAULT_MAX_FEEDBACK_CHARS, MIN_FEEDBACK_CHARS};

use super::error::ValidationError;

/// Coaching feedback configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CoachingConfig {
    /// Cap on rendered feedback length, in characters.
    #[serde(default = "default_max_feedback_chars")]
    pub max_feedback_chars: usize,

    /// Fixed seed for response selection; unset means OS entropy.
    ///
    /// Pinning a seed makes the coached responses reproducible, which
    /// demos and tests rely on.
    #[serde(default)]
    pub response_seed: Option<u64>,
}

impl CoachingConfig {
    /// Validate coaching configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // A cap at or under the minimum would truncate every template
        // into unusable feedback.
        if self.max_feedback_chars <= MIN_FEEDBACK_CHARS {
            return Err(ValidationError::FeedbackCapTooSmall);
        }
        Ok(())
    }
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            max_feedback_chars: default_max_feedback_chars(),
            response_seed: None,
        }
    }
}

fn default_max_feedback_chars() -> usize {
    DEFAULT_MAX_FEEDBACK_CHARS
}
