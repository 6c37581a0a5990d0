//! Terminal Wordle
//!
//! A single-player Wordle game for the terminal: six attempts to find a
//! hidden five-letter word, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Verdict, Word, evaluate};
//!
//! let answer = Word::new("slate").unwrap();
//! let guess = Word::new("crane").unwrap();
//!
//! let verdicts = evaluate(&answer, &guess);
//! assert_eq!(verdicts[2], Verdict::Correct); // A
//! assert_eq!(verdicts[4], Verdict::Correct); // E
//! ```

// Core domain types
pub mod core;

// Round state machine and keyboard tracking
pub mod game;

// Persisted statistics
pub mod stats;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
