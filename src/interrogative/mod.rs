//! Interrogative detection from part-of-speech tag patterns.
//!
//! Two stages, both pure functions over compiled-in reference data:
//!
//! - [`is_interrogative`] matches a sentence's tag sequence against a fixed
//!   set of question-opening patterns.
//! - [`QuestionType::evaluate`] resolves an interrogative sentence to a
//!   semantic question category via ordered token/tag sub-list rules.
//!
//! [`detect_interrogative`] composes the two the way orchestration consumes
//! them.
//!
//! # Example
//!
//! ```
//! use parlance::interrogative::{QuestionType, detect_interrogative};
//!
//! let tokens: Vec<String> = ["Where", "is", "the", "library", "?"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let tags: Vec<String> = ["WRB", "VBZ", "DT", "NN", "."]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! assert_eq!(detect_interrogative(&tokens, &tags), Some(QuestionType::Location));
//! ```

mod patterns;
mod question_type;

// Public exports
pub use patterns::is_interrogative;
pub use question_type::QuestionType;

/// Detect whether the sentence is interrogative and, if so, resolve its
/// question category.
///
/// `None` means the sentence is not a question, or is a question of no known
/// category; neither case is an error.
pub fn detect_interrogative(tokens: &[String], tags: &[String]) -> Option<QuestionType> {
    if is_interrogative(tokens, tags) {
        QuestionType::evaluate(tokens, tags)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_resolves_category() {
        let question_type = detect_interrogative(
            &strings(&["Who", "is", "the", "best", "player", "?"]),
            &strings(&["WP", "VBZ", "DT", "JJS", "NN", "."]),
        );
        assert_eq!(question_type, Some(QuestionType::People));
    }

    #[test]
    fn test_detect_rejects_declarative() {
        let question_type = detect_interrogative(
            &strings(&["The", "cat", "sat", "."]),
            &strings(&["DT", "NN", "VBD", "."]),
        );
        assert_eq!(question_type, None);
    }
}
