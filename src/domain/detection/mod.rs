//! Objection detection - lexicon, classifier, and detection results.
//!
//! The classifier is a pure keyword scorer: it holds no mutable state,
//! performs no I/O, and is safe to call from any thread.

mod category;
mod classifier;
mod lexicon;
mod result;

pub use category::ObjectionCategory;
pub use classifier::{ObjectionClassifier, DEFAULT_OBJECTION_THRESHOLD, DEFAULT_SATURATION};
pub use lexicon::{Lexicon, LexiconEntry, Trigger};
pub use result::DetectionResult;
