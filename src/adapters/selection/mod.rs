//! Selection strategy adapters.

mod round_robin;
mod seeded;

pub use round_robin::RoundRobinSelection;
pub use seeded::SeededSelection;
