//! Error types for CodeInsight
//!
//! The content core (`content`, `analysis`) is infallible; these errors come
//! from the plumbing around it: config files, the ingest store, and input
//! resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CodeInsight operations
pub type InsightResult<T> = Result<T, InsightError>;

/// Main error type for CodeInsight operations
#[derive(Error, Debug)]
pub enum InsightError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Repository id not present in the ingest store
    #[error("repository '{repo_id}' not found in {dir}")]
    UnknownRepository { repo_id: String, dir: PathBuf },

    /// Ingest store holds no repositories
    #[error("no ingested repositories found in {dir}")]
    EmptyStore { dir: PathBuf },
}
