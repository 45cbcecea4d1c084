//! Detection result returned by the classifier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;

use super::ObjectionCategory;

/// Outcome of one classification call.
///
/// Created fresh per call and immutable once returned. Serializable so
/// callers can forward it to analytics alongside the rendered feedback.
///
/// # Invariants
///
/// - `category` is either a lexicon category or the `None` sentinel.
/// - When `category` is `None`, `confidence` is zero and `matched_terms`
///   is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Winning category, or the `None` sentinel.
    pub category: ObjectionCategory,
    /// Normalized score in [0, 1].
    pub confidence: Confidence,
    /// Lexicon terms found in the input, for explainability.
    pub matched_terms: Vec<String>,
}

impl DetectionResult {
    /// Creates a result for a matched category.
    pub fn new(
        category: ObjectionCategory,
        confidence: Confidence,
        matched_terms: Vec<String>,
    ) -> Self {
        Self {
            category,
            confidence,
            matched_terms,
        }
    }

    /// The "no objection detected" result.
    pub fn none() -> Self {
        Self {
            category: ObjectionCategory::None,
            confidence: Confidence::ZERO,
            matched_terms: Vec::new(),
        }
    }

    /// Applies a caller-chosen threshold.
    ///
    /// Returns true only when a real category won AND its confidence
    /// meets the threshold. The threshold deliberately lives with the
    /// caller, not in the classifier, so sensitivity can be tuned
    /// without touching the scoring algorithm.
    pub fn is_objection(&self, threshold: f64) -> bool {
        !self.category.is_none() && self.confidence.meets(threshold)
    }
}
