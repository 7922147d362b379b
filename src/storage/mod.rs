//! Filesystem storage for the play log.
//!
//! JSONL is the source of truth: one line per recorded play, in record
//! order. The only mutations are appending a new play and removing the
//! most recent one (undo); nothing is ever edited in place.

mod play_log;

pub use play_log::PlayStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("play log is empty")]
    EmptyLog,
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the play log file.
    pub fn plays_path(&self) -> PathBuf {
        self.data_dir.join("plays.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
