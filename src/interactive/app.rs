//! TUI application state and logic

use crate::commands::{PlayConfig, start_session};
use crate::core::{GameStatus, WORD_LENGTH, Word, normalize};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const GAME_OVER_HINT: &str = "Press 'n' for new game or 'q' to quit.";

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub config: PlayConfig,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no session can be started from `config` and `words`.
    pub fn new(words: &'a [Word], config: PlayConfig) -> Result<Self> {
        let mut rng = config.rng();
        let session = start_session(&config, words, &mut rng)?;

        Ok(Self {
            words,
            config,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a 5-letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
        })
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.session.state().is_over() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        }
    }

    /// Submit the typed word as a guess
    ///
    /// The input is cleared only when the guess is accepted.
    pub fn submit_input(&mut self) {
        match self.session.submit_guess(&self.input_buffer) {
            Ok(state) => {
                self.input_buffer.clear();
                match state.status() {
                    GameStatus::Won => {
                        let tries = state.attempts_used();
                        let noun = if tries == 1 { "guess" } else { "guesses" };
                        self.add_message(
                            &format!("Congratulations! Got it in {tries} {noun}."),
                            MessageStyle::Success,
                        );
                        self.add_message(GAME_OVER_HINT, MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        let answer = self.session.target().to_string();
                        self.add_message(
                            &format!("Sorry, the correct answer is {answer}."),
                            MessageStyle::Error,
                        );
                        self.add_message(GAME_OVER_HINT, MessageStyle::Info);
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        match start_session(&self.config, self.words, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&format!("{err:#}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_game();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.input_mode() {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                // Input is disabled once the game is over
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) if c.is_alphabetic() && !ctrl => {
                    if self.input_buffer.chars().count() < WORD_LENGTH {
                        self.input_buffer.push(normalize(c));
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
