//! Session status

use std::fmt;

/// Lifecycle status of a game session
///
/// `InProgress` is the only non-terminal state. Once a session reaches
/// `Won` or `Lost` it accepts no further guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check whether the session has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GameStatus::InProgress, false)]
    #[case(GameStatus::Won, true)]
    #[case(GameStatus::Lost, true)]
    fn terminal_states(#[case] status: GameStatus, #[case] expected: bool) {
        assert_eq!(status.is_terminal(), expected);
    }

    #[test]
    fn default_is_in_progress() {
        assert_eq!(GameStatus::default(), GameStatus::InProgress);
    }

    #[test]
    fn display_names() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert_eq!(GameStatus::Won.to_string(), "won");
        assert_eq!(GameStatus::Lost.to_string(), "lost");
    }
}
