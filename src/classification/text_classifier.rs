//! Topic classification over a trained bag-of-words model.

use std::path::Path;

use log::debug;

use crate::analysis::Sentence;
use crate::classification::classifier::PhraseClassifier;
use crate::classification::model::BagOfWordsModel;
use crate::classification::types::LabelDistribution;
use crate::error::Result;

/// Classifies a sentence's raw text into topic labels.
#[derive(Debug)]
pub struct TextClassifier {
    model: BagOfWordsModel,
}

impl TextClassifier {
    /// Wrap an already-loaded model.
    pub fn new(model: BagOfWordsModel) -> Self {
        TextClassifier { model }
    }

    /// Load the model artifact at `path`, validated against `labels`.
    pub fn open<P: AsRef<Path>>(path: P, labels: &[String]) -> Result<Self> {
        Ok(TextClassifier::new(BagOfWordsModel::load(path, labels)?))
    }

    /// The underlying model.
    pub fn model(&self) -> &BagOfWordsModel {
        &self.model
    }
}

impl PhraseClassifier for TextClassifier {
    fn classify(&self, sentence: &Sentence) -> Result<LabelDistribution> {
        let distribution = self.model.distribution(&sentence.raw)?;
        debug!("topic distribution for {:?}: {distribution:?}", sentence.raw);
        Ok(distribution)
    }

    fn name(&self) -> &str {
        "topic"
    }
}
