//! Core domain types for the game
//!
//! Pure, dependency-light types: the validated word and the guess
//! evaluation that produces per-letter feedback.

mod verdict;
mod word;

pub use verdict::{Verdict, evaluate};
pub use word::{Word, WordError};

/// Length of every answer and guess
pub const WORD_LEN: usize = 5;
