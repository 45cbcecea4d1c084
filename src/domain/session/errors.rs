//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SessionId};

/// Practice session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session was not found.
    #[error("Practice session {0} not found")]
    NotFound(SessionId),

    /// Session has already been completed.
    #[error("Practice session {0} is already completed")]
    AlreadyCompleted(SessionId),

    /// Infrastructure error from a collaborator.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn already_completed(id: SessionId) -> Self {
        SessionError::AlreadyCompleted(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    /// Maps to the shared error code taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::AlreadyCompleted(_) => ErrorCode::SessionCompleted,
            SessionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_expected_codes() {
        let id = SessionId::new();
        assert_eq!(SessionError::not_found(id).code(), ErrorCode::SessionNotFound);
        assert_eq!(
            SessionError::already_completed(id).code(),
            ErrorCode::SessionCompleted
        );
        assert_eq!(
            SessionError::infrastructure("boom").code(),
            ErrorCode::InternalError
        );
    }

    #[test]
    fn already_completed_displays_session_id() {
        let id = SessionId::new();
        let message = format!("{}", SessionError::already_completed(id));
        assert!(message.contains(&id.to_string()));
    }
}
