//! The classification orchestrator.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use rayon::prelude::*;

use crate::analysis::Sentence;
use crate::classification::{
    ClassificationResult, LabelDistribution, PhraseClassifier, PredictedSentence, TextClassifier,
};
use crate::error::{ParlanceError, Result};
use crate::interrogative;
use crate::service::config::ClassificationConfig;
use crate::storage::SharedState;

/// Coordinates per-sentence inference for analyzed-text units.
///
/// Holds the loaded classifiers and the shared-state handle. All inference is
/// read-only over immutable model data, so one service instance serves
/// concurrent requests without synchronization.
pub struct ClassificationService {
    classifiers: Vec<Box<dyn PhraseClassifier>>,
    state: Arc<dyn SharedState>,
    detect_interrogatives: bool,
}

impl ClassificationService {
    /// Open a service from configuration, loading the topic model eagerly.
    ///
    /// A missing or malformed model artifact fails here, before any request
    /// is accepted.
    pub fn open(config: &ClassificationConfig, state: Arc<dyn SharedState>) -> Result<Self> {
        let classifier = TextClassifier::open(&config.model_path, &config.topic_labels)?;
        Ok(ClassificationService::with_classifiers(
            state,
            vec![Box::new(classifier)],
            config.detect_interrogatives,
        ))
    }

    /// Build a service from already-constructed classifiers.
    pub fn with_classifiers(
        state: Arc<dyn SharedState>,
        classifiers: Vec<Box<dyn PhraseClassifier>>,
        detect_interrogatives: bool,
    ) -> Self {
        ClassificationService {
            classifiers,
            state,
            detect_interrogatives,
        }
    }

    /// Classify every sentence of the unit and persist the aggregate result.
    ///
    /// Idempotent for unchanged input and model. Fails with the not-found
    /// error when the unit is absent, and with the persist error when
    /// inference succeeded but the write-back failed.
    pub fn classify_unit(&self, unit_id: &str) -> Result<ClassificationResult> {
        let analyzed = self.state.fetch(unit_id)?;
        debug!(
            "classifying unit {unit_id} ({} sentences)",
            analyzed.sentences.len()
        );

        // Sentences are independent; classify them in parallel, preserving
        // input order in the collected output.
        let sentences: Vec<PredictedSentence> = analyzed
            .sentences
            .par_iter()
            .map(|sentence| self.classify_sentence(sentence))
            .collect();

        let result = ClassificationResult::new(sentences);

        self.state
            .store(unit_id, &result)
            .map_err(|e| ParlanceError::persist(format!("unit {unit_id}: {e}")))?;

        Ok(result)
    }

    /// Run every registered classifier plus interrogative detection for one
    /// sentence. Inference errors are contained here: a failing classifier
    /// contributes an empty distribution and its siblings still run.
    fn classify_sentence(&self, sentence: &Sentence) -> PredictedSentence {
        let mut predictions = BTreeMap::new();
        for classifier in &self.classifiers {
            let distribution = match classifier.classify(sentence) {
                Ok(distribution) => distribution,
                Err(e) => {
                    warn!(
                        "classifier {} failed on {:?}: {e}",
                        classifier.name(),
                        sentence.raw
                    );
                    LabelDistribution::new()
                }
            };
            predictions.insert(classifier.name().to_string(), distribution);
        }

        let question_type = if self.detect_interrogatives && sentence.is_well_formed() {
            interrogative::detect_interrogative(&sentence.tokens, &sentence.tags)
        } else {
            None
        };

        PredictedSentence {
            predictions,
            question_type,
        }
    }
}

impl std::fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationService")
            .field(
                "classifiers",
                &self
                    .classifiers
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>(),
            )
            .field("detect_interrogatives", &self.detect_interrogatives)
            .finish()
    }
}
