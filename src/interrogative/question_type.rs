//! Semantic question categories and their resolution rules.

use serde::{Deserialize, Serialize};

/// The semantic category of an interrogative sentence.
///
/// Each category carries a reference token sequence and tag sequence; a
/// sentence belongs to the first category (in declaration order) whose two
/// sequences both appear as contiguous sub-lists of the sentence's lower-cased
/// tokens and tags. The declaration order is load-bearing: `Quantity`,
/// `Frequency`, and `Distance` carry two-token "how ..." patterns that must be
/// tried before the bare "how" of `Description`, which would otherwise absorb
/// every "how" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// "who" — asking after a person.
    People,
    /// "where" — asking after a place.
    Location,
    /// "when" — asking after a point in time.
    Occasion,
    /// "why" — asking after a cause.
    Reason,
    /// "what" — asking after a fact.
    Information,
    /// "which" — asking for a selection.
    Choice,
    /// "how much" — asking after an amount.
    Quantity,
    /// "how often" — asking after a rate.
    Frequency,
    /// "how far" — asking after a distance.
    Distance,
    /// "how" — asking after a manner.
    Description,
}

impl QuestionType {
    /// All categories, in resolution priority order.
    pub const ALL: [QuestionType; 10] = [
        QuestionType::People,
        QuestionType::Location,
        QuestionType::Occasion,
        QuestionType::Reason,
        QuestionType::Information,
        QuestionType::Choice,
        QuestionType::Quantity,
        QuestionType::Frequency,
        QuestionType::Distance,
        QuestionType::Description,
    ];

    /// The reference token sequence, lower-cased.
    pub fn token_sequence(self) -> &'static [&'static str] {
        match self {
            QuestionType::People => &["who"],
            QuestionType::Location => &["where"],
            QuestionType::Occasion => &["when"],
            QuestionType::Reason => &["why"],
            QuestionType::Information => &["what"],
            QuestionType::Choice => &["which"],
            QuestionType::Quantity => &["how", "much"],
            QuestionType::Frequency => &["how", "often"],
            QuestionType::Distance => &["how", "far"],
            QuestionType::Description => &["how"],
        }
    }

    /// The reference part-of-speech tag sequence.
    pub fn tag_sequence(self) -> &'static [&'static str] {
        match self {
            QuestionType::People => &["WP"],
            QuestionType::Location => &["WRB"],
            QuestionType::Occasion => &["WRB"],
            QuestionType::Reason => &["WRB"],
            QuestionType::Information => &["WP"],
            QuestionType::Choice => &["WDT"],
            QuestionType::Quantity => &["WRB", "JJ"],
            QuestionType::Frequency => &["WRB", "RB"],
            QuestionType::Distance => &["WRB", "RB"],
            QuestionType::Description => &["WRB"],
        }
    }

    /// Resolve the question category of a sentence already confirmed
    /// interrogative.
    ///
    /// Tokens are lower-cased for comparison; tags are matched as given. The
    /// first category whose tag sequence and token sequence both occur as
    /// contiguous sub-lists wins. `None` when no category matches, which is a
    /// normal outcome.
    pub fn evaluate(tokens: &[String], tags: &[String]) -> Option<QuestionType> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        QuestionType::ALL.into_iter().find(|question_type| {
            contains_sublist(tags, question_type.tag_sequence())
                && contains_sublist(&lowered, question_type.token_sequence())
        })
    }
}

/// Whether `needle` occurs as a contiguous sub-list of `haystack`.
fn contains_sublist(haystack: &[String], needle: &[&str]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.iter().zip(needle).all(|(h, n)| h.as_str() == *n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn evaluate(tokens: &[&str], tags: &[&str]) -> Option<QuestionType> {
        QuestionType::evaluate(&strings(tokens), &strings(tags))
    }

    #[test]
    fn test_simple_categories() {
        assert_eq!(
            evaluate(
                &["Who", "is", "the", "best", "player", "?"],
                &["WP", "VBZ", "DT", "JJS", "NN", "."],
            ),
            Some(QuestionType::People)
        );
        assert_eq!(
            evaluate(
                &["Where", "is", "the", "library", "?"],
                &["WRB", "VBZ", "DT", "NN", "."],
            ),
            Some(QuestionType::Location)
        );
        assert_eq!(
            evaluate(
                &["When", "is", "his", "birthday", "?"],
                &["WRB", "VBZ", "PRP$", "NN", "."],
            ),
            Some(QuestionType::Occasion)
        );
        assert_eq!(
            evaluate(
                &["Why", "are", "they", "always", "late", "?"],
                &["WRB", "VBP", "PRP", "RB", "RB", "."],
            ),
            Some(QuestionType::Reason)
        );
        assert_eq!(
            evaluate(
                &["What", "is", "your", "name", "?"],
                &["WP", "VBZ", "PRP$", "NN", "."],
            ),
            Some(QuestionType::Information)
        );
        assert_eq!(
            evaluate(
                &["Which", "drink", "did", "you", "order", "?"],
                &["WDT", "NN", "VBD", "PRP", "NN", "."],
            ),
            Some(QuestionType::Choice)
        );
    }

    #[test]
    fn test_quantity_beats_description() {
        // "how much" must resolve before the bare "how" pattern.
        assert_eq!(
            evaluate(
                &["How", "much", "money", "will", "I", "need", "?"],
                &["WRB", "JJ", "NN", "MD", "PRP", "VB", "."],
            ),
            Some(QuestionType::Quantity)
        );
    }

    #[test]
    fn test_frequency_and_distance() {
        assert_eq!(
            evaluate(
                &["How", "often", "does", "she", "study", "?"],
                &["WRB", "RB", "VBZ", "PRP", "VB", "."],
            ),
            Some(QuestionType::Frequency)
        );
        // Same tag pair as frequency; the token sequence disambiguates.
        assert_eq!(
            evaluate(
                &["How", "far", "is", "the", "bus", "stop", "?"],
                &["WRB", "RB", "VBZ", "DT", "NN", "NN", "."],
            ),
            Some(QuestionType::Distance)
        );
    }

    #[test]
    fn test_bare_how_is_description() {
        assert_eq!(
            evaluate(
                &["How", "do", "you", "cook", "paella", "?"],
                &["WRB", "VBP", "PRP", "VB", "NN", "."],
            ),
            Some(QuestionType::Description)
        );
    }

    #[test]
    fn test_token_comparison_is_case_insensitive() {
        assert_eq!(
            evaluate(&["WHO", "goes", "there", "?"], &["WP", "VBZ", "RB", "."]),
            Some(QuestionType::People)
        );
    }

    #[test]
    fn test_both_sequences_required() {
        // "who" present as a token, but tagged WDT rather than WP.
        assert_eq!(
            evaluate(&["who", "knows", "?"], &["WDT", "VBZ", "."]),
            None
        );
        // WP tag present, but no matching token.
        assert_eq!(
            evaluate(&["whom", "did", "you", "see", "?"], &["WP", "VBD", "PRP", "VB", "."]),
            None
        );
    }

    #[test]
    fn test_no_category() {
        assert_eq!(
            evaluate(
                &["Do", "you", "like", "tea", "?"],
                &["VBP", "PRP", "VB", "NN", "."],
            ),
            None
        );
    }

    #[test]
    fn test_serialized_form() {
        let json = serde_json::to_string(&QuestionType::People).unwrap();
        assert_eq!(json, "\"PEOPLE\"");
    }
}
