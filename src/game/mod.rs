//! Round state machine and supporting game state
//!
//! The round owns the grid and cursor, drives the evaluator, and feeds the
//! keyboard tracker; the session wires a round to the word pool and the
//! statistics tracker.

mod keyboard;
mod reveal;
mod round;
mod session;

pub use keyboard::KeyboardState;
pub use reveal::{RevealSchedule, RevealStep, reveal_duration};
pub use round::{Cell, CellState, Outcome, Phase, Reject, Reveal, Round, RoundEnd, SubmitResult};
pub use session::Session;

/// Number of guess rows on the board
pub const MAX_GUESSES: usize = 6;
