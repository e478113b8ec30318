//! Error types for loading and describing schemas.
//!
//! The resolver itself never fails; these cover getting a schema document
//! into memory and into the typed model.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before resolution can start.
#[derive(Debug, Error)]
pub enum DescribeError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Schema errors (exit code 2)
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },

    #[error("pointer not found: {pointer}")]
    PointerNotFound { pointer: String },
}

impl DescribeError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DescribeError::FileNotFound { .. } | DescribeError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            DescribeError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}
