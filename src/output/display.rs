//! Display functions for game results

use super::formatters::{board_rows, result_row, result_to_emoji_line};
use crate::core::{GameStatus, GuessResult, LetterStatus};
use crate::session::Session;
use colored::Colorize;
use std::io::{self, Write};

/// Write the full board, one row per history slot
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let state = session.state();
    writeln!(out)?;
    for row in board_rows(state) {
        writeln!(out, "  {row}")?;
    }
    writeln!(
        out,
        "\n  {}",
        format!(
            "Attempt {}/{}",
            state.attempts_used(),
            state.attempts_allowed()
        )
        .bright_black()
    )?;
    Ok(())
}

/// Write the end-of-game banner, if the game is over
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_banner<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let state = session.state();
    match state.status() {
        GameStatus::InProgress => return Ok(()),
        GameStatus::Won => {
            let tries = state.attempts_used();
            let noun = if tries == 1 { "guess" } else { "guesses" };
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!("  Congratulations! Got it in {tries} {noun}")
                    .bright_green()
                    .bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!("  Sorry, the correct answer is {}", session.target())
                    .bright_red()
                    .bold()
            )?;
        }
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, result) in state.guesses().enumerate() {
        writeln!(
            out,
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            result_to_emoji_line(result)
        )?;
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    Ok(())
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &GuessResult) {
    println!("\n  {}", result_row(result));
    println!("  {}", result.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        result.count(LetterStatus::Correct).to_string().green(),
        result.count(LetterStatus::Present).to_string().yellow(),
        result.count(LetterStatus::Absent).to_string().bright_black()
    );
}
