//! Errors raised by the game rules

use super::GameStatus;
use thiserror::Error;

/// Error type for rejected guesses and targets
///
/// Both kinds describe a problem with the caller's input. Neither mutates
/// any state, so the caller can correct the input and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A guess or target does not have exactly `expected` characters
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A guess was submitted after the session ended
    #[error("the game is already over ({0}), start a new game to keep playing")]
    SessionTerminated(GameStatus),
}
