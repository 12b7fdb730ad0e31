//! Command implementations

pub mod config;
pub mod play;

pub use config::{PlayConfig, start_session};
pub use play::{play_with, run_play};
