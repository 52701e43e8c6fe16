//! Sentence and analyzed-text types.
//!
//! A [`Sentence`] carries the raw source text plus the token and tag sequences
//! produced upstream. An [`AnalyzedText`] is the unit of classification: an
//! ordered list of sentences stored in shared state under a unit identifier.

use serde::{Deserialize, Serialize};

/// A single sentence with its upstream NLP analysis.
///
/// `tokens` and `tags` are positionally aligned: `tags[i]` is the
/// part-of-speech label of `tokens[i]`. Inference expects both to be non-empty
/// and of equal length; [`Sentence::is_well_formed`] exposes that check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The raw source text of the sentence.
    pub raw: String,
    /// Ordered word/punctuation tokens.
    pub tokens: Vec<String>,
    /// Part-of-speech tags, one per token. The upstream fabric emits this
    /// field as `posTags`.
    #[serde(alias = "posTags")]
    pub tags: Vec<String>,
}

impl Sentence {
    /// Create a new sentence from raw text and aligned token/tag sequences.
    pub fn new<S: Into<String>>(raw: S, tokens: Vec<String>, tags: Vec<String>) -> Self {
        Sentence {
            raw: raw.into(),
            tokens,
            tags,
        }
    }

    /// Whether the sentence satisfies the inference input invariant:
    /// non-empty tokens and tags of equal length.
    pub fn is_well_formed(&self) -> bool {
        !self.tokens.is_empty() && self.tokens.len() == self.tags.len()
    }
}

/// An ordered list of analyzed sentences, produced upstream and fetched from
/// shared state by unit id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzedText {
    /// The sentences of the unit, in source order.
    pub sentences: Vec<Sentence>,
}

impl AnalyzedText {
    /// Create an analyzed text from a list of sentences.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        AnalyzedText { sentences }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_well_formed() {
        let sentence = Sentence::new(
            "Hello John",
            strings(&["Hello", "John"]),
            strings(&["UH", "NNP"]),
        );
        assert!(sentence.is_well_formed());
    }

    #[test]
    fn test_degenerate_sentences() {
        let empty = Sentence::new("", vec![], vec![]);
        assert!(!empty.is_well_formed());

        let misaligned = Sentence::new("Hello", strings(&["Hello"]), vec![]);
        assert!(!misaligned.is_well_formed());
    }

    #[test]
    fn test_upstream_tag_alias() {
        let json = r#"{"raw":"Hello","tokens":["Hello"],"posTags":["UH"]}"#;
        let sentence: Sentence = serde_json::from_str(json).unwrap();
        assert_eq!(sentence.tags, strings(&["UH"]));
    }
}
