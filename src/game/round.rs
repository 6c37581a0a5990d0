//! The round state machine
//!
//! A round moves through three phases:
//!
//! ```text
//! Typing -> Revealing -> (Typing | Locked)
//! ```
//!
//! Typing fills the current row one letter at a time. A successful submit
//! enters `Revealing`, during which all typing input is ignored; the
//! terminal outcome is resolved synchronously at submit time, so the
//! animated reveal is pure presentation. `finish_reveal` applies the
//! resolved outcome and reports a finished round exactly once.

use super::{KeyboardState, MAX_GUESSES};
use crate::core::{Verdict, WORD_LEN, Word, evaluate};
use crate::wordlists::WordPool;

/// Visual state of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No letter typed yet
    Empty,
    /// Letter typed, not yet scored
    Filled,
    /// Scored during reveal
    Scored(Verdict),
}

/// One cell of the 6x5 board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub state: CellState,
    pub revealed: bool,
}

impl Cell {
    const EMPTY: Self = Self {
        letter: None,
        state: CellState::Empty,
        revealed: false,
    };
}

/// Phase of the round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Revealing,
    Locked,
}

/// Why a submit was turned down (row left editable, nothing changes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    NotEnoughLetters,
    NotInWordList,
}

/// Resolved end-of-reveal outcome, computed at submit time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses_used: usize },
    Lost,
    InProgress,
}

/// An accepted guess: its verdicts plus the already-resolved outcome
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub verdicts: [Verdict; WORD_LEN],
    pub outcome: Outcome,
}

/// A completed round, reported exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    pub won: bool,
    pub guesses_used: usize,
}

/// State for one game of six guesses against a fixed answer
#[derive(Debug, Clone)]
pub struct Round {
    grid: [[Cell; WORD_LEN]; MAX_GUESSES],
    row: usize,
    col: usize,
    phase: Phase,
    answer: Word,
    keyboard: KeyboardState,
    pending: Option<Reveal>,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy)]
pub enum SubmitResult {
    /// Input arrived outside the `Typing` phase; nothing happened
    Ignored,
    /// Guess turned down, row still editable
    Rejected(Reject),
    /// Guess accepted, round is now `Revealing`
    Accepted(Reveal),
}

impl Round {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            grid: [[Cell::EMPTY; WORD_LEN]; MAX_GUESSES],
            row: 0,
            col: 0,
            phase: Phase::Typing,
            answer,
            keyboard: KeyboardState::new(),
            pending: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn cells(&self) -> &[[Cell; WORD_LEN]; MAX_GUESSES] {
        &self.grid
    }

    /// Cursor as (row, col); row equals `MAX_GUESSES` once locked
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The reveal currently in flight, if the round is `Revealing`
    #[must_use]
    pub const fn pending_reveal(&self) -> Option<&Reveal> {
        self.pending.as_ref()
    }

    /// Type one letter into the cursor cell
    ///
    /// Accepts ASCII letters of either case; anything else, a full row, or
    /// a non-`Typing` phase is a silent no-op.
    pub fn type_letter(&mut self, ch: char) {
        if self.phase != Phase::Typing {
            return;
        }
        if !ch.is_ascii_alphabetic() {
            return;
        }
        if self.row >= MAX_GUESSES || self.col >= WORD_LEN {
            return;
        }

        let cell = &mut self.grid[self.row][self.col];
        cell.letter = Some(ch.to_ascii_lowercase() as u8);
        cell.state = CellState::Filled;
        self.col += 1;
    }

    /// Erase the most recent letter in the current row; no-op at column 0
    pub fn backspace(&mut self) {
        if self.phase != Phase::Typing || self.col == 0 {
            return;
        }

        self.col -= 1;
        self.grid[self.row][self.col] = Cell::EMPTY;
    }

    /// Submit the current row as a guess
    ///
    /// On acceptance the round enters `Revealing` and the outcome is
    /// resolved immediately; the caller animates the reveal (or not) and
    /// then calls [`finish_reveal`](Self::finish_reveal).
    pub fn submit(&mut self, pool: &WordPool) -> SubmitResult {
        if self.phase != Phase::Typing {
            return SubmitResult::Ignored;
        }
        if self.col < WORD_LEN {
            return SubmitResult::Rejected(Reject::NotEnoughLetters);
        }

        let text: String = self.grid[self.row]
            .iter()
            .filter_map(|cell| cell.letter.map(char::from))
            .collect();
        let guess = Word::new(text).expect("full row holds validated letters");

        if !pool.is_allowed(&guess) {
            return SubmitResult::Rejected(Reject::NotInWordList);
        }

        let verdicts = evaluate(&self.answer, &guess);
        let outcome = if guess == self.answer {
            Outcome::Won {
                guesses_used: self.row + 1,
            }
        } else if self.row + 1 >= MAX_GUESSES {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        let reveal = Reveal {
            row: self.row,
            verdicts,
            outcome,
        };
        self.pending = Some(reveal);
        self.phase = Phase::Revealing;
        SubmitResult::Accepted(reveal)
    }

    /// Apply one column's verdict to the grid and the keyboard
    ///
    /// Only meaningful while `Revealing`; idempotent per column, no-op
    /// otherwise.
    pub fn reveal_cell(&mut self, col: usize) {
        let Some(reveal) = self.pending else { return };
        if self.phase != Phase::Revealing || col >= WORD_LEN {
            return;
        }

        let cell = &mut self.grid[reveal.row][col];
        if cell.revealed {
            return;
        }

        let verdict = reveal.verdicts[col];
        cell.state = CellState::Scored(verdict);
        cell.revealed = true;
        if let Some(letter) = cell.letter {
            self.keyboard.update(letter, verdict);
        }
    }

    /// End the reveal and apply the resolved outcome
    ///
    /// Any cells the animation did not get to are revealed first. Returns
    /// `Some(RoundEnd)` exactly once per won or lost round; `None` when
    /// the round continues and on any repeated call.
    pub fn finish_reveal(&mut self) -> Option<RoundEnd> {
        if self.phase != Phase::Revealing {
            return None;
        }

        for col in 0..WORD_LEN {
            self.reveal_cell(col);
        }

        let reveal = self.pending.take()?;
        match reveal.outcome {
            Outcome::Won { guesses_used } => {
                self.row = MAX_GUESSES;
                self.phase = Phase::Locked;
                Some(RoundEnd {
                    won: true,
                    guesses_used,
                })
            }
            Outcome::Lost => {
                self.row = MAX_GUESSES;
                self.phase = Phase::Locked;
                Some(RoundEnd {
                    won: false,
                    guesses_used: MAX_GUESSES,
                })
            }
            Outcome::InProgress => {
                self.row += 1;
                self.col = 0;
                self.phase = Phase::Typing;
                None
            }
        }
    }
}
