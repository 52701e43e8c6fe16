//! In-memory shared-state implementation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::analysis::AnalyzedText;
use crate::classification::ClassificationResult;
use crate::error::{ParlanceError, Result};
use crate::storage::traits::SharedState;

const NLP_KEY: &str = "nlp";
const CLASSIFICATION_KEY: &str = "classification";

/// An in-memory shared state over a mutex-guarded map.
///
/// Values are stored JSON-encoded under `<unit>/nlp` and
/// `<unit>/classification` keys, matching the flat string map the external
/// fabric exposes. Useful for tests and for one-shot CLI runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySharedState {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySharedState {
    /// Create an empty shared state.
    pub fn new() -> Self {
        MemorySharedState::default()
    }

    /// Stage analyzed text for a unit, as the upstream producer would.
    pub fn insert_analyzed(&self, unit_id: &str, text: &AnalyzedText) -> Result<()> {
        let encoded = serde_json::to_string(text)?;
        self.entries
            .lock()
            .insert(entry_key(unit_id, NLP_KEY), encoded);
        Ok(())
    }

    /// The classification result stored for a unit, if any.
    pub fn classification(&self, unit_id: &str) -> Result<Option<ClassificationResult>> {
        match self.raw_classification(unit_id) {
            Some(encoded) => Ok(Some(serde_json::from_str(&encoded)?)),
            None => Ok(None),
        }
    }

    /// The stored classification result in its serialized form.
    pub fn raw_classification(&self, unit_id: &str) -> Option<String> {
        self.entries
            .lock()
            .get(&entry_key(unit_id, CLASSIFICATION_KEY))
            .cloned()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SharedState for MemorySharedState {
    fn fetch(&self, unit_id: &str) -> Result<AnalyzedText> {
        let encoded = self
            .entries
            .lock()
            .get(&entry_key(unit_id, NLP_KEY))
            .cloned()
            .ok_or_else(|| ParlanceError::not_found(format!("unit {unit_id}")))?;
        Ok(serde_json::from_str(&encoded)?)
    }

    fn store(&self, unit_id: &str, result: &ClassificationResult) -> Result<()> {
        let encoded = serde_json::to_string(result)?;
        self.entries
            .lock()
            .insert(entry_key(unit_id, CLASSIFICATION_KEY), encoded);
        Ok(())
    }
}

fn entry_key(unit_id: &str, key: &str) -> String {
    format!("{unit_id}/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Sentence;

    fn sample_text() -> AnalyzedText {
        AnalyzedText::new(vec![Sentence::new(
            "Hello John",
            vec!["Hello".to_string(), "John".to_string()],
            vec!["UH".to_string(), "NNP".to_string()],
        )])
    }

    #[test]
    fn test_fetch_roundtrip() {
        let state = MemorySharedState::new();
        let text = sample_text();

        state.insert_analyzed("u1", &text).unwrap();
        assert_eq!(state.fetch("u1").unwrap(), text);
    }

    #[test]
    fn test_fetch_missing_unit() {
        let state = MemorySharedState::new();
        let result = state.fetch("missing");
        assert!(matches!(result, Err(ParlanceError::NotFound(_))));
    }

    #[test]
    fn test_store_and_read_back() {
        let state = MemorySharedState::new();
        let result = ClassificationResult::default();

        assert!(state.classification("u1").unwrap().is_none());
        state.store("u1", &result).unwrap();
        assert_eq!(state.classification("u1").unwrap(), Some(result));
    }

    #[test]
    fn test_units_are_isolated() {
        let state = MemorySharedState::new();
        state.insert_analyzed("u1", &sample_text()).unwrap();

        assert!(state.fetch("u2").is_err());
        assert_eq!(state.len(), 1);
    }
}
