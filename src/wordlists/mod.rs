//! Word pools
//!
//! Two runtime-loaded lists: the answer pool the hidden word is drawn
//! from, and the allowed set a guess must belong to. The allowed set is
//! always a superset of the answers. Loading fails soft to a minimal
//! built-in pool so the game starts even with no data files.

pub mod loader;

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Built-in pool used when no word list can be loaded
pub const FALLBACK: &[&str] = &["apple"];

/// The answer pool and allowed-guess set for a game
#[derive(Debug, Clone)]
pub struct WordPool {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
    used_fallback: bool,
}

impl WordPool {
    /// Build a pool from explicit lists, unioning answers into allowed
    #[must_use]
    pub fn from_words(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let mut allowed: FxHashSet<String> =
            allowed.into_iter().map(|w| w.text().to_string()).collect();
        for answer in &answers {
            allowed.insert(answer.text().to_string());
        }

        Self {
            answers,
            allowed,
            used_fallback: false,
        }
    }

    /// Load the pool from the two word list files
    ///
    /// Either file being unreadable or empty drops the pool back to the
    /// built-in fallback; callers should surface a notice when
    /// [`used_fallback`](Self::used_fallback) reports it.
    #[must_use]
    pub fn load(answers_path: &Path, allowed_path: &Path) -> Self {
        let answers = loader::load_from_file(answers_path).unwrap_or_default();
        let allowed = loader::load_from_file(allowed_path).unwrap_or_default();

        if answers.is_empty() || allowed.is_empty() {
            return Self::fallback();
        }

        Self::from_words(answers, allowed)
    }

    /// The minimal built-in pool
    #[must_use]
    pub fn fallback() -> Self {
        let answers = loader::words_from_slice(FALLBACK);
        let mut pool = Self::from_words(answers, Vec::new());
        pool.used_fallback = true;
        pool
    }

    /// Whether loading fell back to the built-in pool
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    /// Is this word an acceptable guess?
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word.text())
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Draw a random answer for a new round
    ///
    /// # Panics
    /// Will not panic - construction guarantees a non-empty answer pool.
    #[must_use]
    pub fn random_answer<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.answers
            .choose(rng)
            .cloned()
            .expect("answer pool is never empty")
    }
}
