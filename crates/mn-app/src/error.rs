//! Error types for the mn-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the pipeline crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Model error: {0}")]
    Model(String),

    #[error("Failed to read model file: {path}")]
    ModelFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read configuration file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read measurements file: {path}")]
    MeasurementsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Measurements error: {0}")]
    Measurements(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model validation failed: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mn-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<mn_model::ModelError> for AppError {
    fn from(err: mn_model::ModelError) -> Self {
        match err {
            mn_model::ModelError::Validation(err) => AppError::Validation(err.to_string()),
            other => AppError::Model(other.to_string()),
        }
    }
}

impl From<mn_core::MnError> for AppError {
    fn from(err: mn_core::MnError) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<mn_model::ValidationError> for AppError {
    fn from(err: mn_model::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}
