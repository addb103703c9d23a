//! Error types for triage-core.
//!
//! One top-level error enum covers the whole engine, with a focused
//! sub-enum for scoring failures. Structural and validation errors are
//! caller mistakes; everything else is an engine-side failure that carries
//! its message to the boundary instead of crashing the host.

use thiserror::Error;

/// Engine error type for triage-core.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The top-level payload is not the expected shape
    #[error("{0}")]
    Structural(String),

    /// Per-task validation failures, collected across the whole batch
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Scoring failed for a task
    #[error("Scoring error: {0}")]
    Score(#[from] ScoreError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

impl EngineError {
    /// Whether this error is the caller's fault. The transport layer maps
    /// these to a client-error response; everything else is a server-side
    /// failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, EngineError::Structural(_) | EngineError::Validation(_))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for EngineError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        EngineError::Custom(err.to_string())
    }
}

/// Scoring-specific errors.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// A field the scorer needs was absent; defaults are the caller's job
    #[error("Missing field '{field}'")]
    MissingField { field: &'static str },

    /// `due_date` is present but not a valid ISO-8601 calendar date
    #[error("Invalid due_date '{value}': {source}")]
    InvalidDueDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
