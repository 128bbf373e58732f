//! TUI rendering with ratatui
//!
//! Card, difficulty toggles, settings panel and session status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::DifficultyLevel;
use crate::output::formatters::level_label;
use crate::settings::KeyValueStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Card
            Constraint::Percentage(40), // Toggles, progress, messages
        ])
        .split(chunks[1]);

    render_card(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);

    if app.input_mode == InputMode::Settings {
        render_settings(f, app);
    }
}

fn render_header<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let card = app.game.round().card();
    let header = Paragraph::new(Line::from(vec![
        Span::raw("🔤 WORD SWEEP   First Letter = "),
        Span::styled(
            card.first_letter.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
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

fn render_card<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let round = app.game.round();
    let card = round.card();
    let lit = app.game.highlights();

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Difficulty: "),
            Span::styled(level_label(card.level), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(""),
    ];

    for (i, entry) in card.words.iter().enumerate() {
        let focused = i == app.focus && app.input_mode == InputMode::Typing;
        let guess = round.guesses().get(i).unwrap_or_default();

        lines.push(Line::from(vec![
            Span::styled(
                format!("Word {}: ", i + 1),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(entry.definition.clone()),
        ]));

        let input_style = if lit.get(i).copied().unwrap_or(false) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let marker = if focused { "▶ " } else { "  " };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {guess}{cursor} "), input_style),
        ]));
        lines.push(Line::from(""));
    }

    let border_color = if app.game.is_solved() {
        Color::Green
    } else {
        Color::White
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Card ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Difficulty toggles
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_difficulties(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_difficulties<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let active = app.game.active();
    let has_levels = app.game.corpus().has_levels();

    let items: Vec<ListItem> = DifficultyLevel::ALL
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            let on = active.contains(level);
            let locked = !has_levels || !active.can_toggle(level);
            let check = if on { "[x]" } else { "[ ]" };

            let style = if locked {
                Style::default().fg(Color::DarkGray)
            } else if on {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(format!("F{} {check} {}", i + 1, level_label(Some(level)))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Difficulties (next card) ")
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_progress<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let round = app.game.round();
    let total = round.card().len();
    let correct = round.correct_count();
    let percent = progress_percent(correct, total);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{correct}/{total} words"));

    f.render_widget(gauge, area);
}

/// Share of solved slots, 0 for an empty card
fn progress_percent(correct: usize, total: usize) -> u16 {
    (correct * 100)
        .checked_div(total)
        .map_or(0, |pct| u16::try_from(pct.min(100)).unwrap_or(100))
}

fn render_messages<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
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

fn render_settings<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>) {
    let area = centered(f.area(), 54, 10);

    let (state, color) = if app.game.easy_mode() {
        ("ON", Color::Green)
    } else {
        ("OFF", Color::Yellow)
    };

    let location = app
        .settings_location
        .as_deref()
        .unwrap_or("not saved (in-memory)");

    let content = vec![
        Line::from(vec![
            Span::raw("Easy mode: "),
            Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "Light each word as soon as it is right",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!("Saved to: {location}")),
        Line::from(""),
        Line::from(Span::styled(
            "e/Space: toggle | 1-3: levels | Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Settings ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_status<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = if app.game.easy_mode() {
        "Mode: Easy"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.game.stats();
    let stats_text = format!(
        "Cards: {} | Solved: {} | Reveals: {}",
        stats.cards_played, stats.cards_solved, stats.reveals
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.is_solved() {
        "Ctrl+N: New Card | F4: Settings | Esc: Quit"
    } else {
        "↑↓: Move | Ctrl+R: Reveal | Ctrl+N: New | F1-F3: Levels | F4: Settings | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActiveDifficulties;
    use crate::corpus::Corpus;
    use crate::game::Game;
    use crate::settings::{MemoryStore, Settings};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn progress_handles_empty_cards() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(0, 3), 0);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(3, 3), 100);
    }

    #[test]
    fn draws_card_and_settings_panel() {
        let corpus = Corpus::embedded_cards().unwrap();
        let game = Game::with_rng(
            &corpus,
            ActiveDifficulties::all(),
            corpus.default_rule(),
            Settings::new(MemoryStore::new()),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        let mut app = App::new(game, None);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let screen = format!("{:?}", terminal.backend().buffer());
        assert!(screen.contains("WORD SWEEP"));
        assert!(screen.contains("Word 1:"));

        app.input_mode = InputMode::Settings;
        terminal.draw(|f| ui(f, &app)).unwrap();
        let screen = format!("{:?}", terminal.backend().buffer());
        assert!(screen.contains("Easy mode"));
    }
}
