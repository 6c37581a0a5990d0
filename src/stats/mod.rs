//! Persisted play statistics
//!
//! One `Stats` record survives across rounds: games played, wins, streaks,
//! and the win distribution by guess count. The tracker owns the record
//! plus an injected store and writes a fresh snapshot after every
//! completed round. Persistence is best-effort; a broken store never
//! interrupts play.

mod store;

pub use store::{JsonFileStore, MemoryStore, StatsStore};

use crate::game::{MAX_GUESSES, RoundEnd};
use serde::{Deserialize, Serialize};

/// Cross-round statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub distribution: [u32; MAX_GUESSES],
}

impl Stats {
    /// Fold one finished round into the record
    ///
    /// Wins extend the streak and bump the bucket for the guess count;
    /// losses reset the streak and leave the distribution alone.
    pub fn record(&mut self, end: RoundEnd) {
        self.played += 1;
        if end.won {
            self.wins += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if (1..=MAX_GUESSES).contains(&end.guesses_used) {
                self.distribution[end.guesses_used - 1] += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Win percentage, rounded; 0 before any round has finished
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (f64::from(self.wins) * 100.0 / f64::from(self.played)).round() as u32
        }
    }
}

/// Stats record bound to its persistence store
pub struct StatsTracker {
    stats: Stats,
    store: Box<dyn StatsStore>,
}

impl StatsTracker {
    /// Load the persisted snapshot, or start from zeroes
    #[must_use]
    pub fn new(store: Box<dyn StatsStore>) -> Self {
        let stats = store.load().unwrap_or_default();
        Self { stats, store }
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Record a finished round and persist immediately
    pub fn record_round(&mut self, end: RoundEnd) {
        self.stats.record(end);
        self.store.save(&self.stats);
    }
}
