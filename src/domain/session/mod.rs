//! Practice session lifecycle and feedback history.

mod aggregate;
mod errors;
mod events;

pub use aggregate::{FeedbackEntry, PracticeSession, SessionStatus};
pub use errors::SessionError;
pub use events::SessionEvent;
