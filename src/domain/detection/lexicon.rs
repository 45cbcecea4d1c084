//! Static trigger/weight table backing the objection classifier.
//!
//! The lexicon is an explicitly constructed configuration object: it is
//! built once (at startup or in a test) and injected into the classifier.
//! There is no mutation API and no hidden module-global state beyond the
//! lazily built [`Lexicon::standard`] table.

use once_cell::sync::Lazy;

use super::ObjectionCategory;

/// A single trigger phrase with its scoring weight.
///
/// The term is stored pre-normalized (lowercase, collapsed whitespace)
/// so matching never has to normalize the lexicon side again.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    term: String,
    weight: f64,
}

impl Trigger {
    /// Creates a trigger, normalizing the term and clamping the weight
    /// to be non-negative.
    pub fn new(term: impl AsRef<str>, weight: f64) -> Self {
        Self {
            term: normalize(term.as_ref()),
            weight: weight.max(0.0),
        }
    }

    /// The normalized trigger term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The scoring weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Triggers for one objection category, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    category: ObjectionCategory,
    triggers: Vec<Trigger>,
}

impl LexiconEntry {
    /// Creates an entry from (term, weight) pairs.
    pub fn new(category: ObjectionCategory, triggers: &[(&str, f64)]) -> Self {
        Self {
            category,
            triggers: triggers
                .iter()
                .map(|(term, weight)| Trigger::new(term, *weight))
                .collect(),
        }
    }

    /// The category this entry scores.
    pub fn category(&self) -> ObjectionCategory {
        self.category
    }

    /// The triggers for this category.
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }
}

/// Read-only category -> triggers -> weight table.
///
/// # Invariants
///
/// - Entry order is declaration order and doubles as the classifier's
///   tie-break order.
/// - The `None` sentinel never appears as an entry; entries declared for
///   it are dropped at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Builds a lexicon from entries, preserving declaration order.
    ///
    /// Entries for the `None` sentinel are discarded; empty trigger lists
    /// are kept (they simply never match).
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .filter(|e| !e.category.is_none())
                .collect(),
        }
    }

    /// The standard sales-objection lexicon shared across the process.
    pub fn standard() -> &'static Lexicon {
        static STANDARD: Lazy<Lexicon> = Lazy::new(build_standard);
        &STANDARD
    }

    /// Returns the triggers for a category.
    ///
    /// A category with no entry (including the `None` sentinel) returns
    /// an empty slice rather than erroring.
    pub fn entries_for(&self, category: ObjectionCategory) -> &[Trigger] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.triggers())
            .unwrap_or(&[])
    }

    /// All categories with entries, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = ObjectionCategory> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    /// The entries in declaration order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Total number of triggers across all categories.
    pub fn trigger_count(&self) -> usize {
        self.entries.iter().map(|e| e.triggers.len()).sum()
    }
}

/// Normalizes text for matching: lowercase, trimmed, internal whitespace
/// collapsed to single spaces.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_standard() -> Lexicon {
    Lexicon::new(vec![
        LexiconEntry::new(
            ObjectionCategory::Price,
            &[
                ("too expensive", 2.0),
                ("not worth the cost", 2.0),
                ("can't afford", 2.0),
                ("over budget", 2.0),
                ("cheaper", 1.5),
                ("expensive", 1.0),
                ("price", 1.0),
                ("cost", 1.0),
            ],
        ),
        LexiconEntry::new(
            ObjectionCategory::Need,
            &[
                ("don't need", 2.0),
                ("no need", 2.0),
                ("happy with what we have", 2.0),
                ("not necessary", 1.5),
                ("already have", 1.5),
                ("not a priority", 1.5),
            ],
        ),
        LexiconEntry::new(
            ObjectionCategory::Trust,
            &[
                ("never heard of", 2.0),
                ("don't trust", 2.0),
                ("too good to be true", 2.0),
                ("scam", 2.0),
                ("proof", 1.0),
                ("guarantee", 1.0),
            ],
        ),
        LexiconEntry::new(
            ObjectionCategory::Timing,
            &[
                ("not right now", 2.0),
                ("bad time", 2.0),
                ("maybe later", 2.0),
                ("next quarter", 1.5),
                ("call me back", 1.5),
                ("too busy", 1.5),
            ],
        ),
        LexiconEntry::new(
            ObjectionCategory::Authority,
            &[
                ("not my decision", 2.0),
                ("ask my boss", 2.0),
                ("talk to my manager", 2.0),
                ("decision maker", 1.5),
                ("need approval", 1.5),
                ("check with", 1.0),
            ],
        ),
    ])
}
