//! TUI application state and logic

use crate::core::DifficultyLevel;
use crate::game::Game;
use crate::output::formatters::level_label;
use crate::settings::KeyValueStore;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'c, S: KeyValueStore, R: Rng = ThreadRng> {
    pub game: Game<'c, S, R>,
    pub focus: usize,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Where settings are saved, shown in the settings panel
    pub settings_location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Settings,
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

impl<'c, S: KeyValueStore, R: Rng> App<'c, S, R> {
    #[must_use]
    pub fn new(game: Game<'c, S, R>, settings_location: Option<String>) -> Self {
        Self {
            game,
            focus: 0,
            input_mode: InputMode::Typing,
            messages: vec![
                Message {
                    text: "Type the word each definition describes.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Every word starts with the letter shown above.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            settings_location,
        }
    }

    /// Number of slots on the current card
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.game.round().card().len()
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

    pub fn focus_next(&mut self) {
        let len = self.slot_count().max(1);
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.slot_count().max(1);
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn type_char(&mut self, c: char) {
        let was_solved = self.game.is_solved();
        if self.game.push_char(self.focus, c).is_ok() {
            self.announce_if_solved(was_solved);
        }
    }

    pub fn backspace(&mut self) {
        let was_solved = self.game.is_solved();
        if self.game.pop_char(self.focus).is_ok() {
            self.announce_if_solved(was_solved);
        }
    }

    pub fn reveal_focused(&mut self) {
        let was_solved = self.game.is_solved();
        match self.game.reveal(self.focus) {
            Ok(()) => {
                self.add_message(&format!("Revealed word {}", self.focus + 1), MessageStyle::Info);
                self.announce_if_solved(was_solved);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_card(&mut self) {
        match self.game.new_card() {
            Ok(()) => {
                self.focus = 0;
                let card = self.game.round().card();
                let text = format!("New card! First letter: {}", card.first_letter);
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_difficulty(&mut self, level: DifficultyLevel) {
        if !self.game.corpus().has_levels() {
            self.add_message("This word list has no difficulty levels", MessageStyle::Error);
            return;
        }

        if self.game.toggle_difficulty(level) {
            let state = if self.game.active().contains(level) { "on" } else { "off" };
            let text = format!("{} {state}; applies to the next card", level_label(Some(level)));
            self.add_message(&text, MessageStyle::Info);
        } else {
            self.add_message(
                &format!("{level} is the only active level"),
                MessageStyle::Error,
            );
        }
    }

    pub fn toggle_easy_mode(&mut self) {
        match self.game.toggle_easy_mode() {
            Ok(enabled) => {
                let text = if enabled {
                    "Easy mode on: words light up as soon as they are right"
                } else {
                    "Easy mode off: words light up once all are right"
                };
                self.add_message(text, MessageStyle::Success);
            }
            Err(e) => {
                self.add_message(&format!("Could not save settings: {e}"), MessageStyle::Error);
            }
        }
    }

    fn announce_if_solved(&mut self, was_solved: bool) {
        if self.game.is_solved() && !was_solved {
            self.add_message("🎉 All words found! Ctrl+N for a new card.", MessageStyle::Success);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Typing => self.handle_typing_key(key),
            InputMode::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_typing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if ctrl => self.new_card(),
            KeyCode::Char('r') if ctrl => self.reveal_focused(),
            KeyCode::Char('s') if ctrl => {
                self.input_mode = InputMode::Settings;
            }
            KeyCode::F(4) => {
                self.input_mode = InputMode::Settings;
            }
            KeyCode::F(n @ 1..=3) => {
                self.toggle_difficulty(DifficultyLevel::ALL[usize::from(n - 1)]);
            }
            KeyCode::Up | KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.focus_next(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(4) | KeyCode::Char('q') => {
                self.input_mode = InputMode::Typing;
            }
            KeyCode::Char('e' | ' ') | KeyCode::Enter => self.toggle_easy_mode(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.toggle_difficulty(DifficultyLevel::ALL[index]);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, R: Rng>(app: App<'_, S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("event loop failed: {err:#}");
    }
    res.context("event loop failed")
}

fn run_app<B, S, R, E>(terminal: &mut Terminal<B>, mut app: App<'_, S, R>, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    R: Rng,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    let stats = app.game.stats();
    tracing::info!(
        played = stats.cards_played,
        solved = stats.cards_solved,
        reveals = stats.reveals,
        "session ended"
    );
    Ok(())
}
