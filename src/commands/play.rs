//! Line-mode game
//!
//! Text-based game loop without TUI. Reads guesses line by line and prints
//! the board after each one.

use super::config::{PlayConfig, start_session};
use crate::core::Word;
use crate::output::{write_banner, write_board};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if no session can be started.
pub fn run_play(config: &PlayConfig, words: &[Word]) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play_with(config, words, stdin.lock(), &mut stdout)
}

/// Run the line-mode game on arbitrary input and output streams
///
/// End of input ends the game quietly.
///
/// # Errors
///
/// Returns an error on I/O failure or if no session can be started.
pub fn play_with<R: BufRead, W: Write>(
    config: &PlayConfig,
    words: &[Word],
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Guess the 5-letter word             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Six tries. After each guess every letter is marked:")?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 in the word, wrong spot")?;
    writeln!(out, "  ⬜ not in the word\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new word")?;

    let mut rng = config.rng();
    let mut session = start_session(config, words, &mut rng)?;
    write_board(out, &session)?;

    loop {
        if session.state().is_over() {
            write_banner(out, &session)?;

            let Some(answer) = prompt(&mut input, out, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                session = start_session(config, words, &mut rng)?;
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, &session)?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let Some(line) = prompt(&mut input, out, "Enter guess")? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" => {
                session = start_session(config, words, &mut rng)?;
                writeln!(out, "\n🔄 New game started!")?;
                write_board(out, &session)?;
            }
            _ => match session.submit_guess(&line) {
                Ok(_) => write_board(out, &session)?,
                Err(err) => writeln!(out, "❌ {err}\n")?,
            },
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("input closed");
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
