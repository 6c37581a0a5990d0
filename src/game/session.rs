//! Game session: word pool + current round + statistics
//!
//! The session is the single owner of cross-round state. Rounds delegate
//! their typing and reveal operations straight through; the session's only
//! jobs are drawing fresh answers and forwarding finished rounds to the
//! stats tracker.

use super::{Round, RoundEnd, SubmitResult};
use crate::stats::{Stats, StatsTracker};
use crate::wordlists::WordPool;

pub struct Session {
    pool: WordPool,
    round: Round,
    tracker: StatsTracker,
}

impl Session {
    /// Start a session with its first round already dealt
    #[must_use]
    pub fn new(pool: WordPool, tracker: StatsTracker) -> Self {
        let round = Round::new(pool.random_answer(&mut rand::rng()));
        Self {
            pool,
            round,
            tracker,
        }
    }

    /// Abandon the current round and deal a fresh one; valid in any phase
    pub fn start_round(&mut self) {
        self.round = Round::new(self.pool.random_answer(&mut rand::rng()));
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        self.tracker.stats()
    }

    pub fn type_letter(&mut self, ch: char) {
        self.round.type_letter(ch);
    }

    pub fn backspace(&mut self) {
        self.round.backspace();
    }

    pub fn submit(&mut self) -> SubmitResult {
        self.round.submit(&self.pool)
    }

    pub fn reveal_cell(&mut self, col: usize) {
        self.round.reveal_cell(col);
    }

    /// Finish the in-flight reveal; a completed round is recorded (and
    /// persisted) here, exactly once
    pub fn finish_reveal(&mut self) -> Option<RoundEnd> {
        let end = self.round.finish_reveal()?;
        self.tracker.record_round(end);
        Some(end)
    }
}
