//! Game configuration
//!
//! Resolved command-line options shared by the line-mode and TUI front-ends.

use crate::core::Word;
use crate::session::Session;
use crate::wordlists::pick_target;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for starting games
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Fixed target word; bypasses random selection
    pub answer: Option<String>,
    /// Seed for reproducible target selection
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(answer: Option<String>, seed: Option<u64>) -> Self {
        Self { answer, seed }
    }

    /// Build the random source for target selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Start a new session using the configured answer or a random word
///
/// # Errors
///
/// Returns an error if the configured answer is not 5 letters or the word
/// list is empty.
pub fn start_session(config: &PlayConfig, words: &[Word], rng: &mut StdRng) -> Result<Session> {
    if let Some(answer) = &config.answer {
        return Session::new(answer).with_context(|| format!("invalid answer '{answer}'"));
    }

    let target = pick_target(words, rng).context("word list is empty")?;
    Ok(Session::with_target(target.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn fixed_answer_wins_over_word_list() {
        let config = PlayConfig::new(Some("trace".to_string()), None);
        let words = words_from_slice(&["crane"]);

        let session = start_session(&config, &words, &mut config.rng()).unwrap();
        assert_eq!(session.target().text(), "TRACE");
    }

    #[test]
    fn invalid_answer_is_rejected() {
        let config = PlayConfig::new(Some("tra".to_string()), None);
        let err = start_session(&config, &[], &mut config.rng()).unwrap_err();
        assert!(err.to_string().contains("invalid answer 'tra'"));
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let config = PlayConfig::default();
        assert!(start_session(&config, &[], &mut config.rng()).is_err());
    }

    #[test]
    fn seeded_sessions_repeat() {
        let config = PlayConfig::new(None, Some(99));
        let words = words_from_slice(&["crane", "slate", "trace", "speed", "erase"]);

        let first = start_session(&config, &words, &mut config.rng()).unwrap();
        let second = start_session(&config, &words, &mut config.rng()).unwrap();
        assert_eq!(first.target(), second.target());
    }
}
