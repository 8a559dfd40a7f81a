//! Top score persistence
//!
//! A single best score, read when the game boots and written when a game
//! ends on a new record. Stores never fail loudly: read problems fall back
//! to 0 and write problems are logged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Persistent best-score slot
pub trait ScoreStore {
    fn read(&self) -> u64;
    fn write(&mut self, score: u64);
}

/// On-disk / LocalStorage record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScoreRecord {
    pub top_score: u64,
}

/// In-memory store, for tests and sessions without persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    top_score: u64,
    writes: usize,
}

impl MemoryStore {
    pub fn new(top_score: u64) -> Self {
        Self {
            top_score,
            writes: 0,
        }
    }

    /// Number of `write` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self) -> u64 {
        self.top_score
    }

    fn write(&mut self, score: u64) {
        self.top_score = score;
        self.writes += 1;
    }
}

/// JSON file store for native builds
#[derive(Debug, Clone)]
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

    /// Read the record; a missing file is an empty record
    pub fn try_load(&self) -> Result<TopScoreRecord, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TopScoreRecord::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&json).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write via a temp file and rename so a crash never leaves half a file
    pub fn try_save(&self, record: &TopScoreRecord) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(record).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn read(&self) -> u64 {
        match self.try_load() {
            Ok(record) => {
                log::info!("Loaded top score {}", record.top_score);
                record.top_score
            }
            Err(e) => {
                log::warn!("Could not read top score ({}), starting fresh", e);
                0
            }
        }
    }

    fn write(&mut self, score: u64) {
        match self.try_save(&TopScoreRecord { top_score: score }) {
            Ok(()) => log::info!("Top score saved ({})", score),
            Err(e) => log::warn!("Could not save top score: {}", e),
        }
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "topscore";

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read(&self) -> u64 {
        let value = Self::storage()
            .ok()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        match value.map(|v| v.trim().parse::<u64>()) {
            Some(Ok(score)) => score,
            Some(Err(e)) => {
                log::warn!("Ignoring malformed top score: {}", e);
                0
            }
            None => 0,
        }
    }

    fn write(&mut self, score: u64) {
        match Self::storage() {
            Ok(storage) => {
                if storage
                    .set_item(Self::STORAGE_KEY, &score.to_string())
                    .is_err()
                {
                    log::warn!("LocalStorage rejected top score");
                }
            }
            Err(e) => log::warn!("Could not save top score: {}", e),
        }
    }
}
