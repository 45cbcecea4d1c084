//! Practice session domain events.
//!
//! Emitted by the aggregate for collaborators that record history or
//! drive UI state. Serializable for analytics payloads.

use serde::{Deserialize, Serialize};

use crate::domain::detection::ObjectionCategory;
use crate::domain::foundation::{SessionId, Timestamp, UserId, UtteranceId};

/// Events published over a practice session's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new practice session began.
    Started {
        session_id: SessionId,
        user_id: UserId,
        started_at: Timestamp,
    },

    /// Coaching feedback was delivered for one utterance.
    FeedbackDelivered {
        session_id: SessionId,
        utterance_id: UtteranceId,
        category: ObjectionCategory,
        delivered_at: Timestamp,
    },

    /// The session was completed.
    Completed {
        session_id: SessionId,
        user_id: UserId,
        utterances_coached: u32,
        completed_at: Timestamp,
    },
}

impl SessionEvent {
    /// The session this event belongs to.
    pub fn session_id(&self) -> SessionId {
        match self {
            SessionEvent::Started { session_id, .. }
            | SessionEvent::FeedbackDelivered { session_id, .. }
            | SessionEvent::Completed { session_id, .. } => *session_id,
        }
    }

    /// Stable event type tag for analytics.
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::Started { .. } => "session.started",
            SessionEvent::FeedbackDelivered { .. } => "session.feedback_delivered",
            SessionEvent::Completed { .. } => "session.completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_tags_are_stable() {
        let event = SessionEvent::Started {
            session_id: SessionId::new(),
            user_id: UserId::new(),
            started_at: Timestamp::now(),
        };
        assert_eq!(event.event_type(), "session.started");
    }

    #[test]
    fn session_id_is_extracted_from_any_variant() {
        let session_id = SessionId::new();
        let event = SessionEvent::Completed {
            session_id,
            user_id: UserId::new(),
            utterances_coached: 3,
            completed_at: Timestamp::now(),
        };
        assert_eq!(event.session_id(), session_id);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = SessionEvent::FeedbackDelivered {
            session_id: SessionId::new(),
            utterance_id: UtteranceId::new(),
            category: ObjectionCategory::Timing,
            delivered_at: Timestamp::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"feedback_delivered\""));
        assert!(json.contains("\"category\":\"timing\""));
    }
}
