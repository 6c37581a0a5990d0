//! Best-known letter state for the on-screen keyboard
//!
//! Each letter carries the strongest verdict seen for it so far this
//! round. `Verdict`'s ordering (`Absent < Present < Correct`) is the
//! upgrade rule: a letter marked `Correct` from one position never drops
//! back to `Present` or `Absent` because of a later duplicate.

use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Aggregated per-letter feedback across a round's guesses
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    state: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record feedback for one letter, keeping the stronger verdict
    pub fn update(&mut self, letter: u8, verdict: Verdict) {
        let entry = self.state.entry(letter).or_insert(verdict);
        if verdict > *entry {
            *entry = verdict;
        }
    }

    /// Best-known verdict for a letter, if any guess has scored it
    #[must_use]
    pub fn verdict(&self, letter: u8) -> Option<Verdict> {
        self.state.get(&letter).copied()
    }

    /// Forget everything (new round)
    pub fn reset(&mut self) {
        self.state.clear();
    }
}
