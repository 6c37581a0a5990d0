//! Guess evaluation
//!
//! Scoring a guess against the answer yields one `Verdict` per position.
//! The ordering on `Verdict` doubles as the keyboard precedence: a letter's
//! best-known state only ever moves up.

use super::{WORD_LEN, Word};

/// Per-letter feedback for a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Letter does not appear in the answer (or all its copies are used up)
    Absent,
    /// Letter appears in the answer at a different position
    Present,
    /// Letter is in exactly the right position
    Correct,
}

/// Score `guess` against `answer`, Wordle-style
///
/// Implements the exact feedback rules, including fair handling of
/// duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove each
///    matched letter from the answer's tally, so it cannot also be
///    credited as `Present` elsewhere.
/// 2. Second pass, left to right over the non-correct positions: if the
///    guess letter still has tally remaining, mark `Present` and decrement;
///    otherwise it stays `Absent`.
///
/// A letter appearing N times in the answer is therefore credited at most
/// N times across `Correct` and `Present`, with exact positions winning.
///
/// # Examples
/// ```
/// use wordle_tui::core::{Verdict, Word, evaluate};
///
/// let answer = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// let verdicts = evaluate(&answer, &guess);
/// assert_eq!(verdicts[2], Verdict::Correct);
/// assert_eq!(verdicts[4], Verdict::Correct);
/// ```
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> [Verdict; WORD_LEN] {
    let mut result = [Verdict::Absent; WORD_LEN];
    let mut remaining = answer.letter_counts();

    // First pass: exact position matches
    // Allow: index needed to compare guess[i] with answer[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.char_at(i) == answer.char_at(i) {
            result[i] = Verdict::Correct;

            if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-but-misplaced, from the remaining tally
    // Allow: index needed to check/set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if result[i] == Verdict::Absent {
            let letter = guess.char_at(i);
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    #[test]
    fn verdict_precedence_order() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }

    #[test]
    fn evaluate_all_absent() {
        let answer = Word::new("fghij").unwrap();
        let guess = Word::new("abcde").unwrap();
        assert_eq!(evaluate(&answer, &guess), [Absent; 5]);
    }

    #[test]
    fn evaluate_all_correct() {
        let word = Word::new("apple").unwrap();
        assert_eq!(evaluate(&word, &word), [Correct; 5]);
    }

    #[test]
    fn evaluate_no_repeats_marks_positions_exactly() {
        // CRANE vs SLATE: only A and E align, no other guess letter
        // appears elsewhere except... none do (C, R, N absent from SLATE)
        let answer = Word::new("slate").unwrap();
        let guess = Word::new("crane").unwrap();

        assert_eq!(
            evaluate(&answer, &guess),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_misplaced_letters_present() {
        // STALE vs SLATE: S correct, everything else misplaced
        let answer = Word::new("slate").unwrap();
        let guess = Word::new("stale").unwrap();

        assert_eq!(
            evaluate(&answer, &guess),
            [Correct, Present, Correct, Present, Correct]
        );
    }

    #[test]
    fn evaluate_duplicate_guess_letters_capped_by_answer() {
        // ERASE vs SPEED: ERASE has three E's, SPEED only two.
        // E(present) R(absent) A(absent) S(present) E(present)
        // The third E must not be credited.
        let answer = Word::new("speed").unwrap();
        let guess = Word::new("erase").unwrap();

        let verdicts = evaluate(&answer, &guess);
        let credited_e = guess
            .chars()
            .iter()
            .zip(verdicts.iter())
            .filter(|&(&ch, &v)| ch == b'e' && v != Absent)
            .count();
        assert_eq!(credited_e, 2);
        assert_eq!(verdicts, [Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn evaluate_correct_reserves_letter_before_present() {
        // SPEED vs ERASE: S yellow, both E's yellow, P/D gray
        let answer = Word::new("erase").unwrap();
        let guess = Word::new("speed").unwrap();

        assert_eq!(
            evaluate(&answer, &guess),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O is misplaced, second O aligns.
        // R(present) O(present) B(absent) O(correct) T(absent)
        let answer = Word::new("floor").unwrap();
        let guess = Word::new("robot").unwrap();

        assert_eq!(
            evaluate(&answer, &guess),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluate_second_copy_absent_when_answer_has_one() {
        // ALLEY vs LEAST: only one L in LEAST, so the second guess L
        // gets Absent even though the first was credited.
        let answer = Word::new("least").unwrap();
        let guess = Word::new("alley").unwrap();

        let verdicts = evaluate(&answer, &guess);
        assert_eq!(verdicts[1], Present); // first L
        assert_eq!(verdicts[2], Absent); // second L, tally exhausted
    }

    #[test]
    fn evaluate_self_is_always_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(evaluate(&w, &w), [Correct; 5]);
        }
    }
}
