//! Probabilistic phrase classification.
//!
//! This module turns a sentence's raw text into a probability distribution
//! over a fixed label vocabulary using a pretrained bag-of-words model:
//!
//! - `PhraseClassifier` trait: common interface for per-sentence classifiers
//! - `TextClassifier`: topic classification over a loaded model
//! - `BagOfWordsModel` / `ModelArtifact`: the trained model and its on-disk form
//!
//! Training is an external concern. The crate only loads finished artifacts
//! and queries them; a model is immutable after load and safe to share across
//! threads without synchronization.
//!
//! # Example
//!
//! ```rust,no_run
//! use parlance::analysis::Sentence;
//! use parlance::classification::{PhraseClassifier, TextClassifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let labels = vec!["greeting".to_string(), "other".to_string()];
//! let classifier = TextClassifier::open("models/topics.model", &labels)?;
//!
//! let sentence = Sentence::new("Hello John", vec![], vec![]);
//! let distribution = classifier.classify(&sentence)?;
//! # Ok(())
//! # }
//! ```

mod classifier;
mod model;
mod text_classifier;
mod types;

// Public exports
pub use classifier::{PhraseClassifier, most_likely};
pub use model::{Attribute, BagOfWordsModel, ModelArtifact};
pub use text_classifier::TextClassifier;
pub use types::{ClassificationResult, LabelDistribution, PredictedSentence};
