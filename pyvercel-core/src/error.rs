//! Error types for py-vercel Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PyVercelError
pub type Result<T> = std::result::Result<T, PyVercelError>;

/// Top-level error type for all py-vercel operations
#[derive(Debug, Error)]
pub enum PyVercelError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that occur while reading `package.json`
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

/// Errors that occur while planning a lambda build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Unsupported runtime: {0}")]
    UnsupportedRuntime(String),

    #[error("Invalid entrypoint: {0:?}")]
    InvalidEntrypoint(String),

    #[error("Invalid build config: {0}")]
    InvalidConfig(String),
}
