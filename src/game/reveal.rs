//! Reveal timing
//!
//! The flip animation is a fixed timeline computed up front: a list of
//! `(offset, step)` pairs the UI executes as their instants come due.
//! Nothing here affects the round outcome — that is resolved at submit
//! time — so tests can skip the schedule entirely.

use crate::core::WORD_LEN;
use std::time::Duration;

/// Gap between consecutive column flips
pub const COLUMN_STEP: Duration = Duration::from_millis(260);
/// Offset into a flip at which the verdict color lands
pub const SCORE_AT: Duration = Duration::from_millis(140);
/// Offset into a flip at which the tile settles flat again
pub const FLIP_END_AT: Duration = Duration::from_millis(520);
/// Slack after the last column before the round outcome is applied
pub const FINISH_TAIL: Duration = Duration::from_millis(100);

/// One presentation update within a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Tile starts flipping
    FlipStart(usize),
    /// Tile shows its verdict (drives `Round::reveal_cell`)
    Score(usize),
    /// Tile settles
    FlipEnd(usize),
    /// Apply the outcome (drives `Round::finish_reveal`)
    Finish,
}

/// Precomputed reveal timeline, ordered by offset
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    steps: Vec<(Duration, RevealStep)>,
}

impl RevealSchedule {
    #[must_use]
    pub fn new() -> Self {
        let mut steps = Vec::with_capacity(WORD_LEN * 3 + 1);
        for col in 0..WORD_LEN {
            let base = COLUMN_STEP * col as u32;
            steps.push((base, RevealStep::FlipStart(col)));
            steps.push((base + SCORE_AT, RevealStep::Score(col)));
            steps.push((base + FLIP_END_AT, RevealStep::FlipEnd(col)));
        }
        steps.push((reveal_duration(), RevealStep::Finish));
        steps.sort_by_key(|&(offset, _)| offset);
        Self { steps }
    }

    /// Remaining steps, soonest first
    #[must_use]
    pub fn steps(&self) -> &[(Duration, RevealStep)] {
        &self.steps
    }

    /// Pop every step due at or before `elapsed`
    pub fn drain_due(&mut self, elapsed: Duration) -> Vec<RevealStep> {
        let due = self
            .steps
            .iter()
            .take_while(|&&(offset, _)| offset <= elapsed)
            .count();
        self.steps.drain(..due).map(|(_, step)| step).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::new()
    }
}

/// Total wall time from submit to outcome
#[must_use]
pub fn reveal_duration() -> Duration {
    COLUMN_STEP * WORD_LEN as u32 + FINISH_TAIL
}
