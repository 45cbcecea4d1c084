//! CoachUtteranceHandler - the credit-gated coaching flow.
//!
//! For each user utterance: spend one practice credit, classify the
//! text, apply the configured objection threshold, then select and
//! format the feedback line. The caller (UI layer) renders the returned
//! feedback and may forward the detection metadata to analytics.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::coaching::{ResponseFormatter, ResponseSelector};
use crate::domain::detection::{DetectionResult, ObjectionCategory, ObjectionClassifier};
use crate::domain::foundation::{SessionId, UserId, UtteranceId};
use crate::ports::{CreditBalance, CreditLedger, CreditLedgerError};

/// Command to coach a single utterance.
#[derive(Debug, Clone)]
pub struct CoachUtteranceCommand {
    pub user_id: UserId,
    pub session_id: SessionId,
    /// The utterance text, typed or transcribed upstream.
    pub text: String,
}

/// How the threshold policy resolved the detection.
///
/// The two "no objection" paths are deliberately distinct: `NoMatch`
/// means the sentinel category won outright, while `BelowThreshold`
/// means a real category nominally won but its confidence lost to the
/// configured threshold. Both render encouragement feedback; analytics
/// can still see the near-miss category in the latter.
#[derive(Debug, Clone, PartialEq)]
pub enum CoachingOutcome {
    /// A real objection cleared the threshold.
    Objection { detection: DetectionResult },
    /// A real category won but stayed under the threshold.
    BelowThreshold { detection: DetectionResult },
    /// No lexicon term matched at all.
    NoMatch,
}

impl CoachingOutcome {
    /// True when a rebuttal (rather than encouragement) was coached.
    pub fn is_objection(&self) -> bool {
        matches!(self, CoachingOutcome::Objection { .. })
    }

    /// The detection metadata, reconstructing the sentinel result for
    /// `NoMatch`.
    pub fn detection(&self) -> DetectionResult {
        match self {
            CoachingOutcome::Objection { detection }
            | CoachingOutcome::BelowThreshold { detection } => detection.clone(),
            CoachingOutcome::NoMatch => DetectionResult::none(),
        }
    }
}

/// Result of coaching one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachUtteranceResult {
    /// Identifier minted for this utterance.
    pub utterance_id: UtteranceId,
    /// Display-ready feedback text; never empty.
    pub feedback: String,
    /// How the threshold policy resolved the detection.
    pub outcome: CoachingOutcome,
    /// Credits left after this utterance was coached.
    pub credits_remaining: CreditBalance,
}

/// Errors from the coaching flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    /// The user's practice credits are exhausted; the UI renders the
    /// upgrade prompt.
    #[error(transparent)]
    Credits(#[from] CreditLedgerError),
}

/// Handler for the coach-utterance use case.
pub struct CoachUtteranceHandler {
    ledger: Arc<dyn CreditLedger>,
    classifier: ObjectionClassifier,
    selector: Mutex<ResponseSelector>,
    objection_threshold: f64,
    max_feedback_chars: usize,
}

impl CoachUtteranceHandler {
    pub fn new(
        ledger: Arc<dyn CreditLedger>,
        classifier: ObjectionClassifier,
        selector: ResponseSelector,
        objection_threshold: f64,
        max_feedback_chars: usize,
    ) -> Self {
        Self {
            ledger,
            classifier,
            selector: Mutex::new(selector),
            objection_threshold,
            max_feedback_chars,
        }
    }

    pub async fn handle(
        &self,
        command: CoachUtteranceCommand,
    ) -> Result<CoachUtteranceResult, CoachError> {
        let credits_remaining = match self.ledger.debit(&command.user_id).await {
            Ok(balance) => balance,
            Err(err) => {
                if matches!(err, CreditLedgerError::InsufficientCredits { .. }) {
                    warn!(user_id = %command.user_id, "coaching denied: credits exhausted");
                }
                return Err(err.into());
            }
        };

        let detection = self.classifier.detect(&command.text);
        let outcome = if detection.category.is_none() {
            CoachingOutcome::NoMatch
        } else if detection.is_objection(self.objection_threshold) {
            CoachingOutcome::Objection { detection }
        } else {
            CoachingOutcome::BelowThreshold { detection }
        };

        let feedback_category = match &outcome {
            CoachingOutcome::Objection { detection } => detection.category,
            _ => ObjectionCategory::None,
        };

        let template = self
            .selector
            .lock()
            .unwrap()
            .select_response(feedback_category);
        let feedback = ResponseFormatter::format_with_limit(template, self.max_feedback_chars);

        debug!(
            session_id = %command.session_id,
            category = %feedback_category,
            objection = outcome.is_objection(),
            "utterance coached"
        );

        Ok(CoachUtteranceResult {
            utterance_id: UtteranceId::new(),
            feedback,
            outcome,
            credits_remaining,
        })
    }
}
