//! Phrase classifier trait definition.

use crate::analysis::Sentence;
use crate::classification::types::LabelDistribution;
use crate::error::Result;

/// A per-sentence classifier producing a label distribution.
///
/// Implementations are pure functions over immutable model data; the
/// orchestrator invokes them concurrently across sentences.
pub trait PhraseClassifier: Send + Sync {
    /// Classify a sentence into a probability distribution over labels.
    fn classify(&self, sentence: &Sentence) -> Result<LabelDistribution>;

    /// The name under which this classifier's distribution is reported.
    fn name(&self) -> &str;
}

/// Whether `label` holds the highest probability in `predictions`.
///
/// Returns `false` for an empty distribution.
pub fn most_likely(predictions: &LabelDistribution, label: &str) -> bool {
    predictions
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(best, _)| best == label)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_likely() {
        let mut predictions = LabelDistribution::new();
        predictions.insert("greeting".to_string(), 0.7);
        predictions.insert("farewell".to_string(), 0.2);
        predictions.insert("other".to_string(), 0.1);

        assert!(most_likely(&predictions, "greeting"));
        assert!(!most_likely(&predictions, "farewell"));
    }

    #[test]
    fn test_most_likely_empty() {
        let predictions = LabelDistribution::new();
        assert!(!most_likely(&predictions, "greeting"));
    }
}
