//! Trained bag-of-words model loading and inference.
//!
//! The on-disk [`ModelArtifact`] is an opaque binary file produced by an
//! external training pipeline: a two-attribute schema (a nominal class
//! attribute over the label vocabulary and a free-text attribute), the feature
//! vocabulary, and multinomial parameters in log space. [`BagOfWordsModel`]
//! validates the artifact once at startup and answers posterior queries for
//! arbitrary text afterwards.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::classification::types::LabelDistribution;
use crate::error::{ParlanceError, Result};

/// An attribute of the model's instance schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    /// A categorical attribute over a closed value vocabulary.
    Nominal { name: String, values: Vec<String> },
    /// A free-text attribute.
    Text { name: String },
}

/// The serialized form of a trained bag-of-words classifier.
///
/// `term_log_likelihoods[i][t]` is the log-likelihood of vocabulary term `t`
/// under label `i`; `class_log_priors[i]` is the log-prior of label `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Instance schema; must be exactly a nominal class attribute followed by
    /// a text attribute.
    pub attributes: Vec<Attribute>,
    /// Feature vocabulary, indexed by position.
    pub vocabulary: Vec<String>,
    /// Per-label log-priors.
    pub class_log_priors: Vec<f64>,
    /// Per-label, per-term log-likelihoods.
    pub term_log_likelihoods: Vec<Vec<f64>>,
}

impl ModelArtifact {
    /// Read an artifact from a binary model file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ParlanceError::model_load(format!("cannot open {}: {e}", path.display()))
        })?;
        bincode::deserialize_from(BufReader::new(file)).map_err(|e| {
            ParlanceError::model_load(format!("cannot decode {}: {e}", path.display()))
        })
    }

    /// Write the artifact to a binary model file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|e| ParlanceError::other(format!("cannot encode model artifact: {e}")))
    }
}

/// A validated, in-memory bag-of-words model ready for inference.
///
/// Immutable after construction; shared read-only by all concurrent callers.
#[derive(Debug)]
pub struct BagOfWordsModel {
    /// Label vocabulary, in schema order.
    labels: Vec<String>,
    /// Vocabulary term -> column index.
    term_index: AHashMap<String, usize>,
    class_log_priors: Vec<f64>,
    term_log_likelihoods: Vec<Vec<f64>>,
}

impl BagOfWordsModel {
    /// Load a model from `path` and validate it against the expected label
    /// vocabulary. Any failure here is fatal at startup.
    pub fn load<P: AsRef<Path>>(path: P, labels: &[String]) -> Result<Self> {
        let artifact = ModelArtifact::read(path)?;
        Self::from_artifact(artifact, labels)
    }

    /// Build a model from an already-decoded artifact.
    pub fn from_artifact(artifact: ModelArtifact, labels: &[String]) -> Result<Self> {
        let class_values = Self::validate_schema(&artifact.attributes)?;

        if class_values != labels {
            return Err(ParlanceError::model_load(format!(
                "label vocabulary mismatch: artifact has {class_values:?}, expected {labels:?}"
            )));
        }

        if artifact.class_log_priors.len() != labels.len() {
            return Err(ParlanceError::model_load(format!(
                "expected {} class priors, found {}",
                labels.len(),
                artifact.class_log_priors.len()
            )));
        }

        if artifact.term_log_likelihoods.len() != labels.len() {
            return Err(ParlanceError::model_load(format!(
                "expected {} likelihood rows, found {}",
                labels.len(),
                artifact.term_log_likelihoods.len()
            )));
        }
        for (i, row) in artifact.term_log_likelihoods.iter().enumerate() {
            if row.len() != artifact.vocabulary.len() {
                return Err(ParlanceError::model_load(format!(
                    "likelihood row {i} has {} terms, vocabulary has {}",
                    row.len(),
                    artifact.vocabulary.len()
                )));
            }
        }

        let mut term_index = AHashMap::with_capacity(artifact.vocabulary.len());
        for (idx, term) in artifact.vocabulary.iter().enumerate() {
            if term_index.insert(term.clone(), idx).is_some() {
                return Err(ParlanceError::model_load(format!(
                    "duplicate vocabulary term: {term}"
                )));
            }
        }

        Ok(BagOfWordsModel {
            labels: labels.to_vec(),
            term_index,
            class_log_priors: artifact.class_log_priors,
            term_log_likelihoods: artifact.term_log_likelihoods,
        })
    }

    /// The label vocabulary, in schema order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of terms in the feature vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.term_index.len()
    }

    /// Posterior probability for every label given `text`.
    ///
    /// The text is segmented into lower-cased words and counted against the
    /// fixed vocabulary; out-of-vocabulary words are ignored. Probabilities
    /// are normalized in log space, so they are finite, non-negative, and sum
    /// to 1 unless the model parameters themselves are degenerate, which is
    /// reported as a classification error.
    pub fn distribution(&self, text: &str) -> Result<LabelDistribution> {
        let counts = self.term_counts(text);

        let mut log_posteriors = Vec::with_capacity(self.labels.len());
        for (prior, row) in self
            .class_log_priors
            .iter()
            .zip(&self.term_log_likelihoods)
        {
            let mut score = *prior;
            for (&term, &count) in &counts {
                score += count * row[term];
            }
            log_posteriors.push(score);
        }

        // Log-sum-exp normalization.
        let max = log_posteriors
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            return Err(ParlanceError::classification(
                "non-finite log-posterior".to_string(),
            ));
        }
        let norm: f64 = log_posteriors.iter().map(|s| (s - max).exp()).sum();

        let mut distribution = LabelDistribution::new();
        for (label, score) in self.labels.iter().zip(&log_posteriors) {
            let probability = (score - max).exp() / norm;
            if !probability.is_finite() {
                return Err(ParlanceError::classification(format!(
                    "non-finite posterior for label {label}"
                )));
            }
            distribution.insert(label.clone(), probability);
        }

        Ok(distribution)
    }

    /// Count in-vocabulary word occurrences of `text`, keyed by term index.
    fn term_counts(&self, text: &str) -> AHashMap<usize, f64> {
        let mut counts = AHashMap::new();
        for word in text.unicode_words() {
            if let Some(&idx) = self.term_index.get(word.to_lowercase().as_str()) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        counts
    }

    fn validate_schema(attributes: &[Attribute]) -> Result<&[String]> {
        match attributes {
            [Attribute::Nominal { values, .. }, Attribute::Text { .. }] => Ok(values.as_slice()),
            _ => Err(ParlanceError::model_load(format!(
                "expected a nominal class attribute and a text attribute, found {} attribute(s)",
                attributes.len()
            ))),
        }
    }
}
