//! Error types for the Parlance library.
//!
//! All fallible operations return [`ParlanceError`] through the crate-wide
//! [`Result`] alias. The variants mirror the classification pipeline's error
//! taxonomy: model loading is fatal at startup, missing units and failed
//! write-backs surface to the caller, and per-sentence inference failures are
//! absorbed by the orchestrator.
//!
//! # Examples
//!
//! ```
//! use parlance::error::{ParlanceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ParlanceError::not_found("unit abc"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Parlance operations.
#[derive(Error, Debug)]
pub enum ParlanceError {
    /// The trained model artifact is missing, unreadable, or has the wrong
    /// schema. Raised only during startup and never retryable.
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// The referenced analyzed-text unit is absent from shared state.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Classification finished but writing the result back failed.
    #[error("Persist error: {0}")]
    Persist(String),

    /// Per-sentence inference failure (numerical or internal).
    #[error("Classification error: {0}")]
    Classification(String),

    /// I/O errors (artifact reads, file access).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ParlanceError.
pub type Result<T> = std::result::Result<T, ParlanceError>;

impl ParlanceError {
    /// Create a new model load error.
    pub fn model_load<S: Into<String>>(msg: S) -> Self {
        ParlanceError::ModelLoad(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ParlanceError::NotFound(msg.into())
    }

    /// Create a new persist error.
    pub fn persist<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Persist(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Classification(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(msg.into())
    }
}
