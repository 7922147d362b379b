//! Append-only JSONL play log.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::PlayRecord;

/// The team's play log, one JSON object per line in record order.
pub struct PlayStore {
    path: PathBuf,
}

impl PlayStore {
    /// Create a store over the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the configured play log location.
    pub fn for_config(config: &StorageConfig) -> Self {
        Self::new(config.plays_path())
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Read the full play log in record order.
    ///
    /// Blank and unparseable lines are skipped with a warning so one
    /// corrupt entry cannot take the whole log down.
    pub fn read_all(&self) -> Result<Vec<PlayRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut plays = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(play) => plays.push(play),
                Err(e) => {
                    warn!("Failed to parse line {} in {:?}: {}", line_num, self.path, e);
                }
            }
        }

        debug!("Read {} plays from {:?}", plays.len(), self.path);
        Ok(plays)
    }

    /// The play number the next appended play will receive.
    pub fn next_play_number(&self) -> Result<u32, StorageError> {
        let plays = self.read_all()?;
        Ok(plays.iter().map(|p| p.play_number).max().unwrap_or(0) + 1)
    }

    /// Append one play to the end of the log.
    pub fn append(&self, play: &PlayRecord) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(play)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended play {} to {:?}", play.play_number, self.path);
        Ok(())
    }

    /// Remove the most recently appended play (undo).
    ///
    /// Returns the removed play. Fails with [`StorageError::EmptyLog`]
    /// when there is nothing to remove.
    pub fn remove_most_recent(&self) -> Result<PlayRecord, StorageError> {
        let mut plays = self.read_all()?;
        let removed = plays.pop().ok_or(StorageError::EmptyLog)?;

        self.write_all(&plays)?;
        info!(
            "Removed play {} from {:?} ({} remaining)",
            removed.play_number,
            self.path,
            plays.len()
        );
        Ok(removed)
    }

    /// Rewrite the whole log. Only used by undo.
    fn write_all(&self, plays: &[PlayRecord]) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for play in plays {
            let json = serde_json::to_string(play)?;
            writeln!(writer, "{}", json)?;
        }
        writer.flush()?;
        Ok(())
    }
}
