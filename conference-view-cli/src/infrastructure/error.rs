use conference_view_core::{ConfigError, TopicError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    #[error("Invalid snapshot in {path}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Topic fetch failed: {0}")]
    Topic(#[from] TopicError),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    pub fn snapshot_not_found(path: PathBuf) -> Self {
        CliError::SnapshotNotFound { path }
    }

    pub fn invalid_snapshot(path: PathBuf, reason: impl Into<String>) -> Self {
        CliError::InvalidSnapshot {
            path,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
