//! Classifier tuning configuration.

use serde::Deserialize;

use crate::domain::detection::{DEFAULT_OBJECTION_THRESHOLD, DEFAULT_SATURATION};

use super::error::ValidationError;

/// Objection classifier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Confidence below which a detection is treated as "no objection".
    #[serde(default = "default_threshold")]
    pub objection_threshold: f64,

    /// Raw score that maps to full confidence.
    #[serde(default = "default_saturation")]
    pub saturation: f64,
}

impl DetectionConfig {
    /// Validate detection configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.objection_threshold.is_finite()
            || self.objection_threshold <= 0.0
            || self.objection_threshold > 1.0
        {
            return Err(ValidationError::InvalidThreshold);
        }
        if !self.saturation.is_finite() || self.saturation <= 0.0 {
            return Err(ValidationError::InvalidSaturation);
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            objection_threshold: default_threshold(),
            saturation: default_saturation(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_OBJECTION_THRESHOLD
}

fn default_saturation() -> f64 {
    DEFAULT_SATURATION
}
