//! Practice session aggregate.
//!
//! A session is one practice run for one user: an ordered history of
//! coached utterances plus a completion flag. Persistence of sessions
//! lives behind the application layer's collaborators; the aggregate
//! itself is plain in-memory state.

use serde::{Deserialize, Serialize};

use crate::domain::detection::DetectionResult;
use crate::domain::foundation::{SessionId, Timestamp, UserId, UtteranceId};

use super::{SessionError, SessionEvent};

/// Lifecycle status of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// One coached utterance in a session's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Identifier of the utterance this feedback answers.
    pub utterance_id: UtteranceId,
    /// Classification metadata for analytics and UI styling.
    pub detection: DetectionResult,
    /// The formatted feedback text shown to the user.
    pub feedback: String,
    /// When the feedback was delivered.
    pub delivered_at: Timestamp,
}

/// Practice session aggregate.
///
/// # Invariants
///
/// - `feedback_history` is append-only and ordered by delivery.
/// - A completed session accepts no further feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    id: SessionId,
    user_id: UserId,
    status: SessionStatus,
    feedback_history: Vec<FeedbackEntry>,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl PracticeSession {
    /// Starts a new active session for a user.
    pub fn start(id: SessionId, user_id: UserId) -> (Self, SessionEvent) {
        let started_at = Timestamp::now();
        let session = Self {
            id,
            user_id,
            status: SessionStatus::Active,
            feedback_history: Vec::new(),
            started_at,
            completed_at: None,
        };
        let event = SessionEvent::Started {
            session_id: id,
            user_id,
            started_at,
        };
        (session, event)
    }

    /// Appends delivered feedback to the session history.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session has been completed.
    pub fn record_feedback(
        &mut self,
        entry: FeedbackEntry,
    ) -> Result<SessionEvent, SessionError> {
        if self.status == SessionStatus::Completed {
            return Err(SessionError::already_completed(self.id));
        }

        let event = SessionEvent::FeedbackDelivered {
            session_id: self.id,
            utterance_id: entry.utterance_id,
            category: entry.detection.category,
            delivered_at: entry.delivered_at,
        };
        self.feedback_history.push(entry);
        Ok(event)
    }

    /// Marks the session complete.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session was completed before.
    pub fn complete(&mut self) -> Result<SessionEvent, SessionError> {
        if self.status == SessionStatus::Completed {
            return Err(SessionError::already_completed(self.id));
        }

        let completed_at = Timestamp::now();
        self.status = SessionStatus::Completed;
        self.completed_at = Some(completed_at);
        Ok(SessionEvent::Completed {
            session_id: self.id,
            user_id: self.user_id,
            utterances_coached: self.feedback_history.len() as u32,
            completed_at,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the feedback history, oldest first.
    pub fn feedback_history(&self) -> &[FeedbackEntry] {
        &self.feedback_history
    }

    /// Returns when the session started.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns when the session completed, if it has.
    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }
}
