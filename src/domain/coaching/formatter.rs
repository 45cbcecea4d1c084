//! Display formatting for selected responses.

/// Default cap on rendered feedback length, in characters.
///
/// Keeps feedback inside the practice view's live region without layout
/// overflow.
pub const DEFAULT_MAX_FEEDBACK_CHARS: usize = 280;

/// Every configured template formats to more than this many bytes.
pub const MIN_FEEDBACK_CHARS: usize = 10;

/// Normalizes a selected template into the exact string handed to the UI.
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Formats with the default length cap.
    pub fn format(template: &str) -> String {
        Self::format_with_limit(template, DEFAULT_MAX_FEEDBACK_CHARS)
    }

    /// Trims, collapses internal whitespace, normalizes terminal
    /// punctuation, and truncates to `max_chars` characters.
    ///
    /// Truncation happens on a char boundary and is marked with an
    /// ellipsis. Never panics; a whitespace-only template formats to an
    /// empty string (configured templates are validated non-empty).
    pub fn format_with_limit(template: &str, max_chars: usize) -> String {
        let mut text = template.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return text;
        }

        if text.chars().count() > max_chars {
            text = text
                .chars()
                .take(max_chars.saturating_sub(1))
                .collect::<String>()
                .trim_end()
                .to_string();
            text.push('…');
            return text;
        }

        if !text.ends_with(['.', '!', '?', '…']) {
            text.push('.');
        }
        text
    }
}
