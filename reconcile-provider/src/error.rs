//! Error types for resource handlers.

use reconcile_engine::EngineError;
use thiserror::Error;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors a resource handler can surface.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Selector or locator failure.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The remote API rejected or failed a call.
    #[error("remote API error: {0}")]
    Api(String),

    /// The remote API reports the entity does not exist.
    #[error("remote entity not found: {0}")]
    RemoteNotFound(String),

    /// Provider configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
