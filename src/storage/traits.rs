//! Shared-state trait definition.

use crate::analysis::AnalyzedText;
use crate::classification::ClassificationResult;
use crate::error::Result;

/// A keyed store holding upstream analysis results and classification output.
///
/// Semantics are a flat last-write-wins map: no versioning, no transactions.
/// `fetch` fails with the not-found error when the unit has no staged
/// analyzed text.
pub trait SharedState: Send + Sync + std::fmt::Debug {
    /// Look up the analyzed text previously staged for `unit_id`.
    fn fetch(&self, unit_id: &str) -> Result<AnalyzedText>;

    /// Write the classification result for `unit_id`.
    fn store(&self, unit_id: &str, result: &ClassificationResult) -> Result<()>;
}
