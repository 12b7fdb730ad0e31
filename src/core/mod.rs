//! Core domain types for the guessing game
//!
//! This module contains the pure game rules: word normalization, guess
//! evaluation and the status/error types shared with the session layer.
//! Nothing here performs I/O or depends on a random source.

mod error;
mod status;
mod verdict;
mod word;

pub use error::GameError;
pub use status::GameStatus;
pub use verdict::{GuessResult, LetterStatus, LetterVerdict, evaluate};
pub use word::Word;
pub(crate) use word::normalize;

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per session
pub const MAX_ATTEMPTS: usize = 6;
