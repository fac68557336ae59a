//! High score persistence. The best score is the only durable state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SAVE_PATH: &str = "snake_save.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed save data: {0}")]
    Format(#[from] serde_json::Error),
}

pub trait HighScoreStore {
    fn load(&self) -> Result<u32, StoreError>;
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
struct SaveData {
    best_score: u32,
}

/// Stores `{"best_score": N}` in a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(self.io_error(err)),
        };
        let data: SaveData = serde_json::from_str(&text)?;
        Ok(data.best_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&SaveData { best_score: score })?;
        fs::write(&self.path, text).map_err(|err| self.io_error(err))
    }
}

/// Keeps the score in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    best: u32,
    saves: usize,
}

impl MemoryStore {
    pub fn with_score(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = score;
        self.saves += 1;
        Ok(())
    }
}
