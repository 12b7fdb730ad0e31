//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_banner, write_board};
