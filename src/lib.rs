//! Wordle Game
//!
//! A five-letter word guessing game: six tries to find a hidden word, with
//! every guess scored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameStatus, evaluate};
//! use wordle_game::session::Session;
//!
//! // Score a single guess
//! let result = evaluate("crate", "trace").unwrap();
//! println!("{result}");
//!
//! // Play a session
//! let mut session = Session::new("trace").unwrap();
//! session.submit_guess("crate").unwrap();
//! let state = session.submit_guess("trace").unwrap();
//! assert_eq!(state.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
