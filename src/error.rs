//! Error types for the seed snapshot generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building or writing a seed snapshot.
///
/// Every variant is fatal: the run either completes or terminates with one of
/// these, and nothing is written to the output path unless traversal and
/// encoding fully succeed.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Root directory not found: {0:?}")]
    RootNotFound(PathBuf),

    #[error("Root path is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Entry name is not valid UTF-8: {0:?}")]
    NonUtf8Name(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to write output {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for SnapshotError {
    fn from(err: config::ConfigError) -> Self {
        SnapshotError::Config(err.to_string())
    }
}
