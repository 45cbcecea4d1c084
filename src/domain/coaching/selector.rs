//! Response selection over the template tables.

use crate::domain::detection::ObjectionCategory;
use crate::ports::SelectionStrategy;

use super::templates::{templates_for_category, FALLBACK_RESPONSE};

/// Picks one candidate response for a category.
///
/// The choice among candidates is delegated to an injected
/// [`SelectionStrategy`], so production can use an entropy-seeded random
/// source while tests pin a seed or use round-robin and assert exact
/// output.
pub struct ResponseSelector {
    strategy: Box<dyn SelectionStrategy>,
}

impl ResponseSelector {
    /// Creates a selector with the given strategy.
    pub fn new(strategy: Box<dyn SelectionStrategy>) -> Self {
        Self { strategy }
    }

    /// Selects a response for a category.
    ///
    /// The `None` sentinel (or any category without templates) yields
    /// the neutral fallback rather than an error: the UI must never be
    /// handed blank feedback.
    pub fn select_response(&mut self, category: ObjectionCategory) -> &'static str {
        let candidates = templates_for_category(category);
        if candidates.is_empty() {
            return FALLBACK_RESPONSE;
        }
        let index = self.strategy.pick(candidates.len()).min(candidates.len() - 1);
        candidates[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::selection::{RoundRobinSelection, SeededSelection};

    #[test]
    fn sentinel_category_yields_fallback() {
        let mut selector = ResponseSelector::new(Box::new(RoundRobinSelection::new()));
        assert_eq!(
            selector.select_response(ObjectionCategory::None),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn fixed_seed_yields_identical_choice() {
        let mut first = ResponseSelector::new(Box::new(SeededSelection::seeded(42)));
        let mut second = ResponseSelector::new(Box::new(SeededSelection::seeded(42)));
        assert_eq!(
            first.select_response(ObjectionCategory::Price),
            second.select_response(ObjectionCategory::Price)
        );
    }

    #[test]
    fn round_robin_cycles_through_candidates() {
        let mut selector = ResponseSelector::new(Box::new(RoundRobinSelection::new()));
        let candidates = templates_for_category(ObjectionCategory::Trust);

        for expected in candidates.iter().chain(candidates.iter()) {
            assert_eq!(selector.select_response(ObjectionCategory::Trust), *expected);
        }
    }

    #[test]
    fn selection_is_always_a_configured_candidate() {
        let mut selector = ResponseSelector::new(Box::new(SeededSelection::seeded(7)));
        for _ in 0..50 {
            let chosen = selector.select_response(ObjectionCategory::Timing);
            assert!(templates_for_category(ObjectionCategory::Timing).contains(&chosen));
        }
    }

    #[test]
    fn selected_response_is_never_empty() {
        let mut selector = ResponseSelector::new(Box::new(SeededSelection::seeded(1)));
        for category in [
            ObjectionCategory::Price,
            ObjectionCategory::Need,
            ObjectionCategory::None,
        ] {
            assert!(!selector.select_response(category).is_empty());
        }
    }
}
