//! Session state snapshot

use crate::core::{GameStatus, GuessResult, MAX_ATTEMPTS};

/// Snapshot of a game in progress
///
/// `history` always has `MAX_ATTEMPTS` slots. Slot `i` is filled exactly when
/// `i < attempts_used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionState {
    attempts_used: usize,
    history: [Option<GuessResult>; MAX_ATTEMPTS],
    status: GameStatus,
}

impl SessionState {
    /// Create the state of a fresh game: no attempts, all slots empty
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts_used: 0,
            history: [None; MAX_ATTEMPTS],
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn attempts_allowed(&self) -> usize {
        MAX_ATTEMPTS
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the session has reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// All history slots, including the empty ones for future attempts
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &[Option<GuessResult>; MAX_ATTEMPTS] {
        &self.history
    }

    /// Results of the completed attempts, oldest first
    pub fn guesses(&self) -> impl Iterator<Item = &GuessResult> {
        self.history.iter().flatten()
    }

    /// Result of the most recent attempt
    #[must_use]
    pub fn last_result(&self) -> Option<&GuessResult> {
        self.attempts_used
            .checked_sub(1)
            .and_then(|i| self.history[i].as_ref())
    }

    /// Record one evaluated guess and derive the new status
    ///
    /// Callers must check `is_over` first; a full history has no free slot.
    pub(super) fn record(&self, result: GuessResult) -> Self {
        debug_assert!(!self.is_over(), "record called on a finished session");

        let mut next = *self;
        next.history[self.attempts_used] = Some(result);
        next.attempts_used += 1;

        next.status = if result.is_solved() {
            GameStatus::Won
        } else if next.attempts_used == MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        next
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
