//! Word representation
//!
//! A Word stores a normalized 5-letter word used as a guess or a target.

use super::{GameError, WORD_LENGTH};
use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter word, normalized to upper case
///
/// Only the length is validated. The game does no dictionary checks, so any
/// five characters form a valid word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Length is counted in characters, not bytes. Each character is
    /// upper-cased when it has a single-character upper-case form. `ß`
    /// becomes the capital `ẞ`, so the two compare equal.
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if the input is not exactly
    /// 5 characters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("shrt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, GameError> {
        let letters: Vec<char> = text.as_ref().chars().map(normalize).collect();

        let letters: [char; WORD_LENGTH] = letters.try_into().map_err(|rejected: Vec<char>| {
            GameError::InvalidLength {
                expected: WORD_LENGTH,
                actual: rejected.len(),
            }
        })?;

        Ok(Self {
            text: letters.iter().collect(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the normalized letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the remaining-letter pool during evaluation.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// Upper-case one letter without changing the letter count
pub(crate) fn normalize(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        // Standard upper case is "SS"
        _ if letter == 'ß' => 'ẞ',
        _ => letter,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
