//! Input data model for analyzed text.
//!
//! Parlance does not tokenize or tag text itself. Sentences arrive from an
//! upstream NLP stage already split into tokens with positionally aligned
//! part-of-speech tags, and are read-only to the classification pipeline.

pub mod sentence;

// Re-export commonly used types
pub use sentence::{AnalyzedText, Sentence};
