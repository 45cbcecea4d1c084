//! Coaching response templates for each objection category.
//!
//! Static configuration data: an ordered list of candidate rebuttal
//! prompts per category, plus a neutral fallback used when no category
//! applies. Order matters for deterministic selection strategies.

use crate::domain::detection::ObjectionCategory;

/// Returns the candidate responses for a category, in declaration order.
///
/// The `None` sentinel has no templates; callers fall back to
/// [`FALLBACK_RESPONSE`].
pub fn templates_for_category(category: ObjectionCategory) -> &'static [&'static str] {
    match category {
        ObjectionCategory::Price => PRICE_RESPONSES,
        ObjectionCategory::Need => NEED_RESPONSES,
        ObjectionCategory::Trust => TRUST_RESPONSES,
        ObjectionCategory::Timing => TIMING_RESPONSES,
        ObjectionCategory::Authority => AUTHORITY_RESPONSES,
        ObjectionCategory::None => &[],
    }
}

/// Neutral feedback shown when no objection is detected.
///
/// Must stay non-empty: the UI is never allowed to render blank feedback.
pub const FALLBACK_RESPONSE: &str =
    "Nice delivery. Keep the conversation moving and watch for the prospect's next signal.";

const PRICE_RESPONSES: &[&str] = &[
    "Acknowledge the price concern, then reframe around value: what would solving this problem be worth to them each month?",
    "Break the cost down to a per-day or per-seat figure and compare it to the cost of doing nothing.",
    "Ask what budget they had in mind, then anchor the conversation on outcomes before revisiting the number.",
];

const NEED_RESPONSES: &[&str] = &[
    "Probe the status quo: ask what happens in six months if nothing changes about their current setup.",
    "Surface the hidden cost of their current workaround before restating what your offer replaces.",
    "Agree that their current tool works, then ask which part of the workflow still feels manual or slow.",
];

const TRUST_RESPONSES: &[&str] = &[
    "Lead with social proof: name a similar customer and the concrete result they saw in the first quarter.",
    "Offer a low-risk next step, like a pilot or a money-back window, instead of asking for full commitment.",
    "Invite their skepticism: ask exactly what evidence would make this feel safe, then commit to providing it.",
];

const TIMING_RESPONSES: &[&str] = &[
    "Ask what will be different next quarter, then quantify the cost of waiting until then.",
    "Agree on a small step they can take now so the project stays warm while the timing improves.",
    "Find out what is competing for their attention right now and position your offer against that priority.",
];

const AUTHORITY_RESPONSES: &[&str] = &[
    "Offer to join the conversation with the decision maker and arm your contact with a one-page summary.",
    "Ask what the decision maker will care about most, and tailor the business case to that concern.",
    "Turn your contact into a champion: rehearse with them the pitch they will relay upward.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_real_category_has_templates() {
        for category in ObjectionCategory::ALL {
            assert!(
                !templates_for_category(*category).is_empty(),
                "category {category} has no templates"
            );
        }
    }

    #[test]
    fn sentinel_has_no_templates() {
        assert!(templates_for_category(ObjectionCategory::None).is_empty());
    }

    #[test]
    fn all_templates_are_substantial_text() {
        for category in ObjectionCategory::ALL {
            for template in templates_for_category(*category) {
                assert!(template.trim().len() > 10);
            }
        }
        assert!(FALLBACK_RESPONSE.trim().len() > 10);
    }
}
