//! Common types for classification results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interrogative::QuestionType;

/// Probability per class label.
///
/// Keys are drawn from the model's label vocabulary; values are posterior
/// probabilities summing to 1 (up to floating-point tolerance). An empty map
/// marks a sentence whose inference failed and was absorbed. A sorted map
/// keeps serialized results byte-stable across runs.
pub type LabelDistribution = BTreeMap<String, f64>;

/// Classification output for a single sentence.
///
/// `predictions` is keyed by classifier name, one distribution per registered
/// classifier. `question_type` is present when interrogative detection ran and
/// the sentence resolved to a question category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedSentence {
    /// Per-classifier label distributions.
    pub predictions: BTreeMap<String, LabelDistribution>,
    /// The resolved question category, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}

/// Aggregate classification output for one analyzed-text unit.
///
/// Sentence *i* of the result corresponds to sentence *i* of the input; the
/// ordering is a correctness invariant relied on by downstream consumers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Per-sentence predictions, in input order.
    pub sentences: Vec<PredictedSentence>,
}

impl ClassificationResult {
    /// Create a classification result from per-sentence predictions.
    pub fn new(sentences: Vec<PredictedSentence>) -> Self {
        ClassificationResult { sentences }
    }
}
