//! Weighted-keyword objection classifier.

use tracing::debug;

use crate::domain::foundation::Confidence;

use super::lexicon::normalize;
use super::{DetectionResult, Lexicon, ObjectionCategory};

/// Default caller-side threshold below which a detection is treated as
/// "no objection". Callers own the threshold decision; the classifier
/// only reports raw confidence.
pub const DEFAULT_OBJECTION_THRESHOLD: f64 = 0.31;

/// Default saturation constant for confidence normalization: a raw score
/// at or above this value maps to full confidence.
pub const DEFAULT_SATURATION: f64 = 4.0;

/// Maps free-text input to the most likely objection category.
///
/// Pure and synchronous: no I/O, no mutable state, safe to call from any
/// thread. Identical input always yields an identical result.
#[derive(Debug, Clone)]
pub struct ObjectionClassifier {
    lexicon: Lexicon,
    saturation: f64,
}

impl ObjectionClassifier {
    /// Creates a classifier over an injected lexicon with the default
    /// saturation constant.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_saturation(lexicon, DEFAULT_SATURATION)
    }

    /// Creates a classifier with an explicit saturation constant.
    ///
    /// Non-positive or non-finite saturation falls back to the default.
    pub fn with_saturation(lexicon: Lexicon, saturation: f64) -> Self {
        let saturation = if saturation.is_finite() && saturation > 0.0 {
            saturation
        } else {
            DEFAULT_SATURATION
        };
        Self { lexicon, saturation }
    }

    /// Creates a classifier over the standard sales-objection lexicon.
    pub fn standard() -> Self {
        Self::new(Lexicon::standard().clone())
    }

    /// The lexicon this classifier scores against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The saturation constant used for confidence normalization.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Classifies free-text input.
    ///
    /// # Algorithm
    ///
    /// The input is lowercased and whitespace-collapsed, then each
    /// category's raw score is the sum of the weights of its triggers
    /// that occur as substrings of the normalized input. The highest raw
    /// score wins; equal scores resolve to the first-declared category.
    /// Confidence is `raw / saturation`, capped at 1.0.
    ///
    /// # Edge Cases
    ///
    /// - Empty or all-whitespace input: `None` sentinel, zero confidence.
    /// - No trigger matches anywhere: `None` sentinel, zero confidence.
    ///
    /// Never panics for any UTF-8 input; runtime is linear in input
    /// length times trigger count.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return DetectionResult::none();
        }

        let mut best: Option<(ObjectionCategory, f64, Vec<String>)> = None;

        for entry in self.lexicon.entries() {
            let mut raw_score = 0.0;
            let mut matched = Vec::new();

            for trigger in entry.triggers() {
                if !trigger.term().is_empty() && normalized.contains(trigger.term()) {
                    raw_score += trigger.weight();
                    matched.push(trigger.term().to_string());
                }
            }

            if raw_score <= 0.0 {
                continue;
            }

            // Strict comparison keeps the first-declared category on ties.
            match &best {
                Some((_, best_score, _)) if raw_score <= *best_score => {}
                _ => best = Some((entry.category(), raw_score, matched)),
            }
        }

        let result = match best {
            Some((category, raw_score, matched)) => DetectionResult::new(
                category,
                Confidence::new(raw_score / self.saturation),
                matched,
            ),
            None => DetectionResult::none(),
        };

        debug!(
            category = %result.category,
            confidence = result.confidence.value(),
            matched = result.matched_terms.len(),
            "objection detection"
        );

        result
    }
}

impl Default for ObjectionClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
