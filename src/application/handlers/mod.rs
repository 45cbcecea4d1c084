//! Use-case handlers.

mod coach_utterance;

pub use coach_utterance::{
    CoachError, CoachUtteranceCommand, CoachUtteranceHandler, CoachUtteranceResult,
    CoachingOutcome,
};
