//! Guess submission
//!
//! `submit_guess` is the pure transition function; `Session` pairs it with a
//! fixed target and keeps the latest snapshot.

use super::SessionState;
use crate::core::{GameError, GuessResult, Word};
use tracing::{debug, info};

/// Apply one guess to `state` and return the resulting snapshot
///
/// Checks run in order: a finished session is rejected first, then a guess
/// of the wrong length. A rejected guess leaves `state` as it was.
///
/// # Errors
/// - `GameError::SessionTerminated` if the session is already won or lost
/// - `GameError::InvalidLength` if the guess is not exactly 5 characters
///
/// # Examples
/// ```
/// use wordle_game::core::{GameStatus, Word};
/// use wordle_game::session::{SessionState, submit_guess};
///
/// let target = Word::new("trace").unwrap();
/// let state = SessionState::new();
///
/// let next = submit_guess(&state, &target, "crate").unwrap();
/// assert_eq!(next.attempts_used(), 1);
/// assert_eq!(next.status(), GameStatus::InProgress);
///
/// let done = submit_guess(&next, &target, "TRACE").unwrap();
/// assert_eq!(done.status(), GameStatus::Won);
/// ```
pub fn submit_guess(
    state: &SessionState,
    target: &Word,
    guess: &str,
) -> Result<SessionState, GameError> {
    if state.is_over() {
        return Err(GameError::SessionTerminated(state.status()));
    }

    let guess = Word::new(guess)?;
    let result = GuessResult::score(&guess, target);

    Ok(state.record(result))
}

/// A single game: one immutable target plus the current state snapshot
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    state: SessionState,
}

impl Session {
    /// Start a game for the given target word
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if the target is not exactly
    /// 5 characters.
    pub fn new(target: &str) -> Result<Self, GameError> {
        Ok(Self::with_target(Word::new(target)?))
    }

    /// Start a game for an already validated target
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        debug!(answer = %target, "session started");
        Self {
            target,
            state: SessionState::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Submit a guess and return the new state snapshot
    ///
    /// The returned snapshot is a copy; later submissions never change it.
    ///
    /// # Errors
    /// Same as [`submit_guess`]. On error the session is unchanged.
    pub fn submit_guess(&mut self, guess: &str) -> Result<SessionState, GameError> {
        match submit_guess(&self.state, &self.target, guess) {
            Ok(next) => {
                self.state = next;
                debug!(
                    attempt = next.attempts_used(),
                    guess = %guess,
                    "guess accepted"
                );
                if next.is_over() {
                    info!(
                        status = %next.status(),
                        attempts = next.attempts_used(),
                        "game over"
                    );
                }
                Ok(next)
            }
            Err(err) => {
                debug!(guess = %guess, error = %err, "guess rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, LetterStatus, MAX_ATTEMPTS, WORD_LENGTH};
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> Session {
        Session::new("trace").unwrap()
    }

    #[test]
    fn target_is_normalized() {
        let session = Session::new("Trace").unwrap();
        assert_eq!(session.target().text(), "TRACE");
    }

    #[test]
    fn target_must_be_five_letters() {
        assert_eq!(
            Session::new("trac").unwrap_err(),
            GameError::InvalidLength {
                expected: WORD_LENGTH,
                actual: 4,
            }
        );
    }

    #[rstest]
    fn each_guess_uses_one_attempt(mut session: Session) {
        let mut previous = *session.state();

        for (n, guess) in ["crane", "slate", "adieu"].into_iter().enumerate() {
            let next = session.submit_guess(guess).unwrap();
            assert_eq!(next.attempts_used(), n + 1);
            // Earlier slots are untouched
            assert_eq!(next.history()[..n], previous.history()[..n]);
            previous = next;
        }
    }

    #[rstest]
    fn six_misses_lose(mut session: Session) {
        for guess in ["crane", "slate", "adieu", "pious", "lymph", "bongo"] {
            session.submit_guess(guess).unwrap();
        }

        let state = session.state();
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.attempts_used(), MAX_ATTEMPTS);
        assert!(state.history().iter().all(Option::is_some));
    }

    #[rstest]
    fn hit_on_third_attempt_wins(mut session: Session) {
        session.submit_guess("crane").unwrap();
        session.submit_guess("crate").unwrap();
        let state = session.submit_guess("trace").unwrap();

        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.attempts_used(), 3);
        assert!(state.history()[3..].iter().all(Option::is_none));
        assert_eq!(
            state.last_result().unwrap().count(LetterStatus::Correct),
            WORD_LENGTH
        );
    }

    #[rstest]
    #[case("tra")]
    #[case("trac")]
    #[case("traces")]
    #[case("")]
    fn wrong_length_leaves_state_unchanged(mut session: Session, #[case] guess: &str) {
        session.submit_guess("crane").unwrap();
        let before = *session.state();

        let err = session.submit_guess(guess).unwrap_err();
        assert!(matches!(err, GameError::InvalidLength { .. }));
        assert_eq!(*session.state(), before);
    }

    #[rstest]
    fn guess_after_win_is_rejected(mut session: Session) {
        session.submit_guess("trace").unwrap();
        let before = *session.state();

        for guess in ["crane", "trace", "abc"] {
            assert_eq!(
                session.submit_guess(guess),
                Err(GameError::SessionTerminated(GameStatus::Won))
            );
        }
        assert_eq!(*session.state(), before);
    }

    #[rstest]
    fn guess_after_loss_is_rejected(mut session: Session) {
        for _ in 0..MAX_ATTEMPTS {
            session.submit_guess("crane").unwrap();
        }
        let before = *session.state();

        assert_eq!(
            session.submit_guess("trace"),
            Err(GameError::SessionTerminated(GameStatus::Lost))
        );
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn terminated_check_precedes_length_check() {
        let target = Word::new("trace").unwrap();
        let won = submit_guess(&SessionState::new(), &target, "trace").unwrap();

        assert_eq!(
            submit_guess(&won, &target, "x"),
            Err(GameError::SessionTerminated(GameStatus::Won))
        );
    }

    #[test]
    fn submit_guess_does_not_touch_input_state() {
        let target = Word::new("trace").unwrap();
        let state = SessionState::new();
        let next = submit_guess(&state, &target, "crate").unwrap();

        assert_eq!(state, SessionState::new());
        assert_ne!(state, next);
    }

    #[rstest]
    fn returned_snapshot_is_detached(mut session: Session) {
        let first = session.submit_guess("crane").unwrap();
        session.submit_guess("slate").unwrap();

        assert_eq!(first.attempts_used(), 1);
        assert_eq!(session.state().attempts_used(), 2);
    }
}
