//! Word lists and target selection
//!
//! Provides the embedded answer list and random target selection. The random
//! source is always supplied by the caller.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

// Generated by build.rs from data/answers.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));

/// Pick a random target from `words`
///
/// Returns `None` if `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::{ANSWERS, loader::words_from_slice, pick_target};
///
/// let words = words_from_slice(ANSWERS);
/// let mut rng = StdRng::seed_from_u64(7);
/// assert!(pick_target(&words, &mut rng).is_some());
/// ```
pub fn pick_target<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
