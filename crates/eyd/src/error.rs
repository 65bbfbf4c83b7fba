use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EydError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid keep path {path:?}: {reason}")]
    InvalidKeepPath { path: String, reason: String },

    #[error("Quarantine target exists and is not a directory: {0}")]
    QuarantineNotDirectory(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Failed to move {source_path} to {destination}: {error}")]
    MoveFailed {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Path {path} is not under root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Mount table error: {0}")]
    MountTable(String),
}

pub type Result<T> = std::result::Result<T, EydError>;
