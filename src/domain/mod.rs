//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `detection` - Objection lexicon, classifier, and detection results
//! - `coaching` - Response templates, selection, and display formatting
//! - `session` - Practice session lifecycle and feedback history

pub mod coaching;
pub mod detection;
pub mod foundation;
pub mod session;
