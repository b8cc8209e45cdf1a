//! Error types for scaffold generation.
//!
//! Every variant here is fatal to the session's generation phase: partial
//! output stays on disk and the failure is surfaced with the file that
//! could not be produced.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while writing a scaffold.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
