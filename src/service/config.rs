//! Service configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the classification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Path to the trained topic model artifact.
    pub model_path: PathBuf,
    /// Label vocabulary the artifact was trained over, in schema order.
    pub topic_labels: Vec<String>,
    /// Whether to run interrogative detection per sentence.
    pub detect_interrogatives: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        ClassificationConfig {
            model_path: PathBuf::from("models/topics.model"),
            topic_labels: vec![
                "greeting".to_string(),
                "farewell".to_string(),
                "weather".to_string(),
                "other".to_string(),
            ],
            detect_interrogatives: true,
        }
    }
}
