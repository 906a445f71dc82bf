//! Error types for the reconciliation engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors reported by the selector and the locator.
///
/// The merger has no runtime failure mode and never produces one of these.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No candidate call shape had all of its identifying inputs present.
    #[error("no applicable method among {candidates} candidates: missing required identifying input")]
    NoEligibleMethod { candidates: usize },

    /// No element of the collection matched the requested field/value.
    #[error("no entity with {field} = {value}")]
    NotFound { field: String, value: String },

    /// A match was found but the requested key is missing or of the wrong kind.
    #[error("failed parsing expected field {field}: {reason}")]
    FieldParse { field: String, reason: String },

    /// A record could not be reflected into JSON.
    #[error("reflection error: {0}")]
    Reflect(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn field_parse(field: &str, reason: impl Into<String>) -> Self {
        Self::FieldParse {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
