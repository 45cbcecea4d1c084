//! Coaching responses - templates, selection, and display formatting.

mod formatter;
mod selector;
mod templates;

pub use formatter::{ResponseFormatter, DEFAULT_MAX_FEEDBACK_CHARS, MIN_FEEDBACK_CHARS};
pub use selector::ResponseSelector;
pub use templates::{templates_for_category, FALLBACK_RESPONSE};
