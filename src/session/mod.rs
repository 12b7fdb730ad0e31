//! Game session state machine
//!
//! A session tracks the attempts used, one history slot per allowed attempt
//! and the current status. Submitting a guess produces a fresh state
//! snapshot; the previous snapshot is never modified.

mod controller;
mod state;

pub use controller::{Session, submit_guess};
pub use state::SessionState;
