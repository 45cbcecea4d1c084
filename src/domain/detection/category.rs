//! Objection category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The finite set of sales objection categories.
///
/// Declaration order matters: it is the tie-break order used by the
/// classifier when two categories score equally (first declared wins).
/// `None` is the sentinel for "no objection detected" and never carries
/// lexicon triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectionCategory {
    /// "It costs too much."
    Price,
    /// "We don't need this."
    Need,
    /// "I'm not sure I believe you."
    Trust,
    /// "Not right now."
    Timing,
    /// "I'm not the one who decides."
    Authority,
    /// Sentinel: no objection detected.
    None,
}

impl ObjectionCategory {
    /// All real categories, in declaration (tie-break) order.
    ///
    /// Excludes the `None` sentinel.
    pub const ALL: &'static [ObjectionCategory] = &[
        ObjectionCategory::Price,
        ObjectionCategory::Need,
        ObjectionCategory::Trust,
        ObjectionCategory::Timing,
        ObjectionCategory::Authority,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectionCategory::Price => "price",
            ObjectionCategory::Need => "need",
            ObjectionCategory::Trust => "trust",
            ObjectionCategory::Timing => "timing",
            ObjectionCategory::Authority => "authority",
            ObjectionCategory::None => "none",
        }
    }

    /// Returns true for the `None` sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, ObjectionCategory::None)
    }
}

impl fmt::Display for ObjectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_excludes_sentinel() {
        assert_eq!(ObjectionCategory::ALL.len(), 5);
        assert!(!ObjectionCategory::ALL.contains(&ObjectionCategory::None));
    }

    #[test]
    fn price_is_first_in_tie_break_order() {
        assert_eq!(ObjectionCategory::ALL[0], ObjectionCategory::Price);
    }

    #[test]
    fn is_none_only_for_sentinel() {
        assert!(ObjectionCategory::None.is_none());
        assert!(!ObjectionCategory::Price.is_none());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ObjectionCategory::Price).unwrap(),
            "\"price\""
        );
        assert_eq!(
            serde_json::to_string(&ObjectionCategory::None).unwrap(),
            "\"none\""
        );
    }

    #[test]
    fn category_deserializes_lowercase() {
        let cat: ObjectionCategory = serde_json::from_str("\"timing\"").unwrap();
        assert_eq!(cat, ObjectionCategory::Timing);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", ObjectionCategory::Authority), "authority");
    }
}
