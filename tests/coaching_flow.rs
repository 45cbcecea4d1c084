//! Integration tests for the credit-gated coaching flow.
//!
//! These tests verify the end-to-end path:
//! 1. A practice session starts for a funded user
//! 2. Each utterance spends a credit, is classified, and gets feedback
//! 3. Feedback lands in the session history
//! 4. An exhausted balance blocks further coaching
//!
//! Uses the in-memory ledger and deterministic selection so every
//! assertion is reproducible.

use std::sync::Arc;

use pitchperfect_core::adapters::credits::InMemoryCreditLedger;
use pitchperfect_core::adapters::selection::{RoundRobinSelection, SeededSelection};
use pitchperfect_core::application::handlers::{
    CoachError, CoachUtteranceCommand, CoachUtteranceHandler, CoachingOutcome,
};
use pitchperfect_core::config::AppConfig;
use pitchperfect_core::domain::coaching::ResponseSelector;
use pitchperfect_core::domain::detection::{ObjectionCategory, ObjectionClassifier};
use pitchperfect_core::domain::foundation::{SessionId, Timestamp, UserId};
use pitchperfect_core::domain::session::{FeedbackEntry, PracticeSession, SessionStatus};
use pitchperfect_core::ports::{CreditLedger, CreditLedgerError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn handler_for(ledger: Arc<InMemoryCreditLedger>, config: &AppConfig) -> CoachUtteranceHandler {
    init_tracing();
    let selector = match config.coaching.response_seed {
        Some(seed) => ResponseSelector::new(Box::new(SeededSelection::seeded(seed))),
        None => ResponseSelector::new(Box::new(RoundRobinSelection::new())),
    };
    CoachUtteranceHandler::new(
        ledger,
        ObjectionClassifier::standard(),
        selector,
        config.detection.objection_threshold,
        config.coaching.max_feedback_chars,
    )
}

fn command(user_id: UserId, session_id: SessionId, text: &str) -> CoachUtteranceCommand {
    CoachUtteranceCommand {
        user_id,
        session_id,
        text: text.to_string(),
    }
}

#[tokio::test]
async fn full_practice_session_flow() {
    let config = AppConfig::default();
    let user_id = UserId::new();
    let ledger = Arc::new(InMemoryCreditLedger::new());
    ledger.grant(user_id, 3);
    let handler = handler_for(ledger.clone(), &config);

    let (mut session, _started) = PracticeSession::start(SessionId::new(), user_id);

    let utterances = [
        "This seems too expensive and not worth the cost",
        "I'd have to ask my boss before we commit",
        "Hello there, just saying hi",
    ];

    for text in utterances {
        let result = handler
            .handle(command(user_id, *session.id(), text))
            .await
            .unwrap();

        assert!(result.feedback.len() > 10);

        session
            .record_feedback(FeedbackEntry {
                utterance_id: result.utterance_id,
                detection: result.outcome.detection(),
                feedback: result.feedback,
                delivered_at: Timestamp::now(),
            })
            .unwrap();
    }

    assert_eq!(session.feedback_history().len(), 3);
    assert_eq!(
        session.feedback_history()[0].detection.category,
        ObjectionCategory::Price
    );
    assert_eq!(
        session.feedback_history()[1].detection.category,
        ObjectionCategory::Authority
    );
    assert_eq!(
        session.feedback_history()[2].detection.category,
        ObjectionCategory::None
    );

    // All three credits spent.
    assert!(ledger.balance(&user_id).await.unwrap().is_exhausted());

    session.complete().unwrap();
    assert_eq!(session.status(), SessionStatus::Completed);
}

#[tokio::test]
async fn coaching_stops_when_credits_run_out() {
    let config = AppConfig::default();
    let user_id = UserId::new();
    let session_id = SessionId::new();
    let ledger = Arc::new(InMemoryCreditLedger::new());
    ledger.grant(user_id, 1);
    let handler = handler_for(ledger, &config);

    let first = handler
        .handle(command(user_id, session_id, "your price is too expensive"))
        .await
        .unwrap();
    assert!(first.credits_remaining.is_exhausted());

    let err = handler
        .handle(command(user_id, session_id, "still too expensive"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CoachError::Credits(CreditLedgerError::InsufficientCredits { .. })
    ));
}

#[tokio::test]
async fn seeded_selection_reproduces_identical_feedback() {
    let mut config = AppConfig::default();
    config.coaching.response_seed = Some(42);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let user_id = UserId::new();
        let ledger = Arc::new(InMemoryCreditLedger::new());
        ledger.grant(user_id, 1);
        let handler = handler_for(ledger, &config);

        let result = handler
            .handle(command(user_id, SessionId::new(), "way over budget for us"))
            .await
            .unwrap();
        assert!(result.outcome.is_objection());
        outputs.push(result.feedback);
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn dual_no_objection_paths_are_distinguishable() {
    let config = AppConfig::default();
    let user_id = UserId::new();
    let ledger = Arc::new(InMemoryCreditLedger::new());
    ledger.grant(user_id, 2);
    let handler = handler_for(ledger, &config);

    // No lexicon term at all.
    let no_match = handler
        .handle(command(user_id, SessionId::new(), "lovely weather today"))
        .await
        .unwrap();
    assert_eq!(no_match.outcome, CoachingOutcome::NoMatch);

    // A weak single-keyword hit: real category, confidence under 0.31.
    let below = handler
        .handle(command(user_id, SessionId::new(), "send me the price list"))
        .await
        .unwrap();
    match below.outcome {
        CoachingOutcome::BelowThreshold { detection } => {
            assert_eq!(detection.category, ObjectionCategory::Price);
            assert!(detection.confidence.value() < 0.31);
        }
        other => panic!("expected BelowThreshold, got {other:?}"),
    }
}

#[tokio::test]
async fn very_long_utterance_is_coached_without_issue() {
    let config = AppConfig::default();
    let user_id = UserId::new();
    let ledger = Arc::new(InMemoryCreditLedger::new());
    ledger.grant(user_id, 1);
    let handler = handler_for(ledger, &config);

    let mut text = "we have been evaluating vendors all year ".repeat(250);
    text.push_str("and honestly it is too expensive");
    assert!(text.len() > 10_000);

    let result = handler
        .handle(command(user_id, SessionId::new(), &text))
        .await
        .unwrap();
    assert_eq!(result.outcome.detection().category, ObjectionCategory::Price);
    assert!(result.feedback.chars().count() <= config.coaching.max_feedback_chars);
}
