use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failures while saving or loading the log file.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("log file io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("log file (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// What a [`StockLog::load`] call found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed; this many entries replaced the in-memory list.
    Loaded(usize),
    /// No file at the configured path; the in-memory list is untouched.
    NoFile,
}

/// Append-only entry list bound to a JSON file.
///
/// The whole list is written and read in one piece; there is no incremental
/// persistence.
#[derive(Debug)]
pub struct StockLog<T> {
    entries: Vec<T>,
    path: PathBuf,
}

impl<T> StockLog<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole list to the configured path as indented JSON.
    pub fn save(&self) -> Result<(), LogError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        tracing::info!(path = %self.path.display(), count = self.entries.len(), "stock log saved");
        Ok(())
    }

    /// Replace the in-memory list from the configured path.
    ///
    /// A missing file is a reportable outcome, not an error.
    pub fn load(&mut self) -> Result<LoadOutcome, LogError> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "no stock log file found");
            return Ok(LoadOutcome::NoFile);
        }

        let json = fs::read_to_string(&self.path)?;
        self.entries = serde_json::from_str(&json)?;
        tracing::info!(path = %self.path.display(), count = self.entries.len(), "stock log loaded");
        Ok(LoadOutcome::Loaded(self.entries.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StockItem;
    use chrono::Utc;

    fn sample_items() -> Vec<StockItem> {
        let now = Utc::now();
        vec![
            StockItem::new(101, "Desk Lamp", 8, now),
            StockItem::new(102, "Office Chair", 12, now),
            StockItem::new(103, "Filing Cabinet", 5, now),
        ]
    }

    #[test]
    fn save_then_load_round_trips_the_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.json");

        let mut log = StockLog::new(&path);
        for item in sample_items() {
            log.add(item);
        }
        log.save().unwrap();

        let mut reloaded: StockLog<StockItem> = StockLog::new(&path);
        let outcome = reloaded.load().unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded(3));
        assert_eq!(reloaded.entries(), log.entries());
    }

    #[test]
    fn load_without_a_file_reports_no_file_and_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut log: StockLog<StockItem> = StockLog::new(dir.path().join("absent.json"));
        log.add(StockItem::new(1, "Projector", 2, Utc::now()));

        let outcome = log.load().unwrap();
        assert_eq!(outcome, LoadOutcome::NoFile);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.json");
        std::fs::write(&path, "not json").unwrap();

        let mut log: StockLog<StockItem> = StockLog::new(&path);
        let err = log.load().unwrap_err();
        assert!(matches!(err, LogError::Serde(_)), "{err:?}");
    }

    #[test]
    fn saved_file_is_an_indented_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.json");

        let mut log = StockLog::new(&path);
        log.add(StockItem::new(101, "Desk Lamp", 8, Utc::now()));
        log.save().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"Name\": \"Desk Lamp\""));
    }
}
