//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, LetterVerdict, WORD_LENGTH};
use crate::session::SessionState;
use colored::{ColoredString, Colorize};

/// Format one letter as a colored tile like " C "
#[must_use]
pub fn verdict_tile(verdict: LetterVerdict) -> ColoredString {
    let cell = format!(" {} ", verdict.letter);
    match verdict.status {
        LetterStatus::Correct => cell.black().bold().on_green(),
        LetterStatus::Present => cell.black().bold().on_yellow(),
        LetterStatus::Absent => cell.white().on_bright_black(),
    }
}

/// Format a guess result as a row of colored tiles
#[must_use]
pub fn result_row(result: &GuessResult) -> String {
    result
        .iter()
        .map(|&v| verdict_tile(v).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an unfilled board row
#[must_use]
pub fn empty_row() -> String {
    vec![" · ".dimmed().to_string(); WORD_LENGTH].join(" ")
}

/// Format every history slot, one line per slot
#[must_use]
pub fn board_rows(state: &SessionState) -> Vec<String> {
    state
        .history()
        .iter()
        .map(|slot| slot.as_ref().map_or_else(empty_row, result_row))
        .collect()
}

/// Format a guess result as emoji squares followed by the word
#[must_use]
pub fn result_to_emoji_line(result: &GuessResult) -> String {
    format!("{} {}", result.to_emoji(), result.word())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};
    use crate::session::Session;
    use colored::Color;

    // Drop ANSI escape sequences, whether or not colors are enabled
    fn strip_ansi(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn tile_pads_letter() {
        let verdict = LetterVerdict {
            letter: 'C',
            status: LetterStatus::Correct,
        };
        let tile = verdict_tile(verdict);
        assert_eq!(tile.input, " C ");
        assert_eq!(tile.bgcolor, Some(Color::Green));
    }

    #[test]
    fn tile_color_follows_status() {
        let present = verdict_tile(LetterVerdict {
            letter: 'T',
            status: LetterStatus::Present,
        });
        let absent = verdict_tile(LetterVerdict {
            letter: 'X',
            status: LetterStatus::Absent,
        });
        assert_eq!(present.bgcolor, Some(Color::Yellow));
        assert_eq!(absent.bgcolor, Some(Color::BrightBlack));
    }

    #[test]
    fn row_joins_tiles() {
        let result = evaluate("crate", "trace").unwrap();
        assert_eq!(strip_ansi(&result_row(&result)), " C   R   A   T   E ");
    }

    #[test]
    fn empty_row_has_five_cells() {
        assert_eq!(empty_row().matches('·').count(), WORD_LENGTH);
    }

    #[test]
    fn board_shows_every_slot() {
        let mut session = Session::with_target(Word::new("trace").unwrap());
        session.submit_guess("crate").unwrap();

        let rows: Vec<String> = board_rows(session.state())
            .iter()
            .map(|row| strip_ansi(row))
            .collect();
        assert_eq!(rows.len(), 6);
        assert!(rows[0].contains('C'));
        assert!(rows[1..].iter().all(|row| row.contains('·')));
    }

    #[test]
    fn emoji_line() {
        let result = evaluate("robot", "floor").unwrap();
        assert_eq!(result_to_emoji_line(&result), "🟨🟨⬜🟩⬜ ROBOT");
    }
}
