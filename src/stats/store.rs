//! Stats persistence stores
//!
//! The store is a deliberately small port: load whatever snapshot exists,
//! save a new one. Missing or unreadable data loads as `None` and write
//! failures are swallowed, so statistics can never take the game down.

use super::Stats;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key-value persistence for the stats snapshot
pub trait StatsStore {
    /// The persisted snapshot, or `None` if absent or unreadable
    fn load(&self) -> Option<Stats>;

    /// Persist a snapshot, best-effort
    fn save(&self, stats: &Stats);
}

/// Stats stored as one JSON file on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Option<Stats> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, stats: &Stats) {
        let Ok(json) = serde_json::to_string_pretty(stats) else {
            return;
        };
        // Best-effort: an unwritable file must not interrupt the game
        let _ = fs::write(&self.path, json);
    }
}

/// In-memory store for tests
#[derive(Default, Clone)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<Stats>>>,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Option<Stats> {
        self.slot.lock().ok()?.clone()
    }

    fn save(&self, stats: &Stats) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(stats.clone());
        }
    }
}
