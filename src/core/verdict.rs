//! Guess evaluation
//!
//! Scores a guess against the target letter by letter. Each letter gets one
//! of three verdicts:
//! - Correct: letter matches the target at that position
//! - Present: letter occurs elsewhere in the target
//! - Absent: letter does not occur, or every occurrence is already claimed
//!
//! Repeated letters are resolved with a remaining-count pool so a letter is
//! never reported more often than it occurs in the target.

use super::{GameError, WORD_LENGTH, Word};
use std::fmt;

/// Verdict for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII symbol for this status ('G', 'Y' or '-')
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// A guessed letter together with its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterVerdict {
    pub letter: char,
    pub status: LetterStatus,
}

/// Per-letter verdicts for one guess, index-aligned with the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterVerdict; WORD_LENGTH]);

impl GuessResult {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool
    /// 2. Second pass, left to right: mark a letter present while the pool
    ///    still holds it, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let result = GuessResult::score(&guess, &target);
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent)
    /// assert_eq!(result.count(LetterStatus::Present), 3);
    /// assert!(!result.is_solved());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = target.letter_counts();

        // First pass: exact position matches
        let pairs = guess.letters().iter().zip(target.letters());
        for (i, (&letter, &expected)) in pairs.enumerate() {
            if letter == expected {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, earlier positions claim the pool first
        for (i, &letter) in guess.letters().iter().enumerate() {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(std::array::from_fn(|i| LetterVerdict {
            letter: guess.letter_at(i),
            status: statuses[i],
        }))
    }

    /// Get the verdicts in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over the verdicts in guess order
    pub fn iter(&self) -> std::slice::Iter<'_, LetterVerdict> {
        self.0.iter()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|v| v.status == LetterStatus::Correct)
    }

    /// Count the letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|v| v.status == status).count()
    }

    /// The guessed word, as normalized during evaluation
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|v| v.letter).collect()
    }

    /// Convert the verdicts to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.status.to_emoji()).collect()
    }

    /// Convert the verdicts to an ASCII pattern like "GY-GY"
    #[must_use]
    pub fn to_pattern(&self) -> String {
        self.0.iter().map(|v| v.status.symbol()).collect()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a LetterVerdict;
    type IntoIter = std::slice::Iter<'a, LetterVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}

/// Evaluate a guess string against a target string
///
/// Both inputs are case-insensitive.
///
/// # Errors
/// Returns `GameError::InvalidLength` if either input is not exactly
/// 5 characters.
///
/// # Examples
/// ```
/// use wordle_game::core::evaluate;
///
/// let result = evaluate("crate", "TRACE").unwrap();
/// assert_eq!(result.to_pattern(), "YGGYG");
///
/// assert!(evaluate("cat", "trace").is_err());
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<GuessResult, GameError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(GuessResult::score(&guess, &target))
}
