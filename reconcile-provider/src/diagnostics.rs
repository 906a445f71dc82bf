//! User-facing diagnostics.
//!
//! Handler errors are reported to the practitioner as a short summary plus
//! an actionable detail, the way plan/apply output presents them.

use crate::error::ProviderError;
use reconcile_engine::EngineError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic attached to a resource operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Translates a handler error for the given resource type.
    pub fn from_error(err: &ProviderError, resource_type: &str) -> Self {
        match err {
            ProviderError::Engine(EngineError::NoEligibleMethod { .. }) => Self::error(
                "Missing required identifying input",
                format!(
                    "None of the lookup strategies for {resource_type} could be used. \
                     Set the identifying attributes (for example `id` or `name`) in the configuration."
                ),
            ),
            ProviderError::Engine(EngineError::NotFound { field, value }) => Self::error(
                "Could not resolve resource",
                format!(
                    "No {resource_type} with {field} = {value} appeared when listing. \
                     If it was just created it may still be provisioning; otherwise check \
                     that {field} matches an existing {resource_type}."
                ),
            ),
            ProviderError::Engine(EngineError::FieldParse { field, reason }) => Self::error(
                "Failed parsing expected field",
                format!(
                    "Reading {field} from the {resource_type} API response failed: {reason}. \
                     The remote API response format may have changed."
                ),
            ),
            ProviderError::Engine(EngineError::Reflect(e)) => Self::error(
                "Failed reading resource record",
                format!("The {resource_type} record could not be reflected: {e}"),
            ),
            ProviderError::Api(message) => Self::error(
                "Remote API error",
                format!("The {resource_type} API call failed: {message}"),
            ),
            ProviderError::RemoteNotFound(id) => Self::warning(
                "Resource not found",
                format!("The {resource_type} {id} no longer exists and will be removed from state."),
            ),
            ProviderError::Config(message) => Self::error("Invalid provider configuration", message.clone()),
            ProviderError::Serialization(e) => Self::error(
                "Serialization error",
                format!("Encoding or decoding the {resource_type} record failed: {e}"),
            ),
            ProviderError::Io(e) => Self::error("I/O error", e.to_string()),
        }
    }
}

impl From<&ProviderError> for Diagnostic {
    fn from(err: &ProviderError) -> Self {
        Self::from_error(err, "resource")
    }
}
