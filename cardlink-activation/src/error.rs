//! Error types for the activation layer.

use thiserror::Error;

/// Errors from reading or writing the local activation record.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// Underlying filesystem failure.
    #[error("activation store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized.
    #[error("activation record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No platform data directory is available for the default store
    /// location.
    #[error("no platform data directory available")]
    NoDataDir,
}

/// Result type for activation operations.
pub type ActivationResult<T> = Result<T, ActivationError>;
