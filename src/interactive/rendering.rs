//! TUI rendering with ratatui
//!
//! Draws the board, the message log and the status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GuessResult, LetterStatus, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let mut lines = Vec::with_capacity(state.attempts_allowed() * 2);

    for (i, slot) in state.history().iter().enumerate() {
        let row = match slot {
            Some(result) => result_spans(result),
            // The row under the cursor shows what is being typed
            None if i == state.attempts_used() && app.input_mode() == InputMode::Guessing => {
                input_spans(&app.input_buffer)
            }
            None => input_spans(""),
        };
        lines.push(Line::from(row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn result_spans(result: &GuessResult) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for verdict in result {
        let bg = match verdict.status {
            LetterStatus::Correct => Color::Green,
            LetterStatus::Present => Color::Yellow,
            LetterStatus::Absent => Color::DarkGray,
        };
        spans.push(Span::styled(
            format!(" {} ", verdict.letter),
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    spans
}

fn input_spans(typed: &str) -> Vec<Span<'static>> {
    let mut letters = typed.chars();
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for _ in 0..WORD_LENGTH {
        let span = match letters.next() {
            Some(letter) => Span::styled(
                format!("[{letter}]"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    spans.pop();
    spans
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let attempts = Paragraph::new(format!(
        "Attempt {}/{} | {}",
        state.attempts_used(),
        state.attempts_allowed(),
        state.status()
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(attempts, chunks[0]);

    let help_text = match app.input_mode() {
        InputMode::Guessing => "Enter submit | ^N new | Esc quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::PlayConfig;
    use crate::core::Word;
    use ratatui::{Terminal, backend::TestBackend};

    const NO_WORDS: &[Word] = &[];

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_guesses_and_typed_input() {
        let mut app = App::new(NO_WORDS, PlayConfig::new(Some("trace".into()), None)).unwrap();
        app.input_buffer = "CRATE".to_string();
        app.submit_input();
        app.input_buffer = "SL".to_string();

        let text = screen(&app);
        assert!(text.contains(" C   R   A   T   E "));
        assert!(text.contains("[S] [L] [ ] [ ] [ ]"));
        assert!(text.contains("Attempt 1/6 | in progress"));
    }

    #[test]
    fn renders_game_over_help() {
        let mut app = App::new(NO_WORDS, PlayConfig::new(Some("trace".into()), None)).unwrap();
        app.input_buffer = "TRACE".to_string();
        app.submit_input();

        let text = screen(&app);
        assert!(text.contains("Attempt 1/6 | won"));
        assert!(text.contains("n: New Game | q: Quit"));
    }
}
