//! Simple interactive CLI mode
//!
//! Line-based game for terminals without TUI support

use crate::core::DifficultyLevel;
use crate::game::Game;
use crate::output::formatters::{level_label, slot_marker};
use crate::settings::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Guess for an explicit slot, or the slot under the cursor
    Guess { slot: Option<usize>, text: String },
    Reveal(usize),
    NewCard,
    ToggleEasy,
    ToggleLevel(DifficultyLevel),
    Show,
    Help,
    Quit,
}

/// Parse one input line
///
/// Slot numbers are 1-based on input and 0-based in the result.
///
/// # Errors
///
/// Returns a message for unknown commands or bad slot numbers.
pub fn parse_command(input: &str, slots: usize) -> Result<SimpleCommand, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(SimpleCommand::Show);
    }

    if let Some(rest) = input.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.next();

        return match name.as_str() {
            "quit" | "q" | "exit" => Ok(SimpleCommand::Quit),
            "new" | "n" => Ok(SimpleCommand::NewCard),
            "easy" | "e" => Ok(SimpleCommand::ToggleEasy),
            "show" | "s" => Ok(SimpleCommand::Show),
            "help" | "h" | "?" => Ok(SimpleCommand::Help),
            "reveal" | "r" => {
                let arg = arg.ok_or("usage: /reveal <slot>")?;
                parse_slot(arg, slots).map(SimpleCommand::Reveal)
            }
            "level" | "l" => {
                let arg = arg.ok_or("usage: /level <everyday|intermediate|challenging>")?;
                arg.parse()
                    .map(SimpleCommand::ToggleLevel)
                    .map_err(|e| e.to_string())
            }
            other => Err(format!("unknown command '/{other}', try /help")),
        };
    }

    // "2 horizon" targets slot 2; anything else goes to the cursor
    if let Some((first, rest)) = input.split_once(char::is_whitespace)
        && first.chars().all(|c| c.is_ascii_digit())
    {
        let slot = parse_slot(first, slots)?;
        return Ok(SimpleCommand::Guess {
            slot: Some(slot),
            text: rest.trim().to_string(),
        });
    }

    Ok(SimpleCommand::Guess {
        slot: None,
        text: input.to_string(),
    })
}

fn parse_slot(text: &str, slots: usize) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if (1..=slots).contains(&n) => Ok(n - 1),
        _ => Err(format!("slot must be a number from 1 to {slots}")),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: KeyValueStore, R: Rng>(game: &mut Game<'_, S, R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_simple_with(game, stdin.lock(), stdout.lock())
}

/// Run the simple mode over any line source and sink
///
/// Stops on `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, R, I, O>(game: &mut Game<'_, S, R>, input: I, mut out: O) -> Result<()>
where
    S: KeyValueStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Sweep - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    write_help(&mut out)?;
    write_board(game, &mut out)?;

    let mut cursor = 0;
    let mut lines = input.lines();

    loop {
        write!(out, "Word {}> ", cursor + 1)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match parse_command(&line, game.round().card().len()) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "❌ {message}")?;
                continue;
            }
        };

        match command {
            SimpleCommand::Quit => break,
            SimpleCommand::Help => write_help(&mut out)?,
            SimpleCommand::Show => write_board(game, &mut out)?,
            SimpleCommand::Guess { slot, text } => {
                let slot = slot.unwrap_or(cursor);
                let was_solved = game.is_solved();
                game.set_slot(slot, text)?;
                cursor = (slot + 1) % game.round().card().len().max(1);
                write_board(game, &mut out)?;
                if game.is_solved() && !was_solved {
                    writeln!(out, "{}", "🎉 All words found! Type /new for another card.".green().bold())?;
                }
            }
            SimpleCommand::Reveal(slot) => {
                game.reveal(slot)?;
                write_board(game, &mut out)?;
            }
            SimpleCommand::NewCard => match game.new_card() {
                Ok(()) => {
                    cursor = 0;
                    writeln!(out, "\n🔄 New card!")?;
                    write_board(game, &mut out)?;
                }
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            SimpleCommand::ToggleEasy => {
                match game.toggle_easy_mode() {
                    Ok(enabled) => writeln!(out, "Easy mode {}", if enabled { "on" } else { "off" })?,
                    Err(e) => writeln!(out, "⚠ Easy mode changed for this session but not saved: {e}")?,
                }
                write_board(game, &mut out)?;
            }
            SimpleCommand::ToggleLevel(level) => {
                if game.toggle_difficulty(level) {
                    writeln!(out, "Active difficulties: {}", game.active())?;
                } else {
                    writeln!(out, "❌ {level} is the only active level and stays on")?;
                }
            }
        }
    }

    let stats = game.stats();
    writeln!(
        out,
        "\n👋 Thanks for playing! Cards: {} | Solved: {} | Reveals: {}\n",
        stats.cards_played, stats.cards_solved, stats.reveals
    )?;
    Ok(())
}

fn write_help<O: Write>(out: &mut O) -> Result<()> {
    writeln!(out, "Type a guess to fill the next word, or '<n> <guess>' for word n.")?;
    writeln!(out, "Commands: /reveal <n>, /new, /easy, /level <name>, /show, /help, /quit\n")?;
    Ok(())
}

fn write_board<S: KeyValueStore, R: Rng, O: Write>(game: &Game<'_, S, R>, out: &mut O) -> Result<()> {
    let round = game.round();
    let card = round.card();
    let highlights = game.highlights();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "First letter = {}   Difficulty: {}   Easy mode: {}",
        card.first_letter.to_string().bright_yellow().bold(),
        level_label(card.level),
        if game.easy_mode() { "on" } else { "off" }
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;

    for (i, entry) in card.words.iter().enumerate() {
        let lit = highlights.get(i).copied().unwrap_or(false);
        let guess = round.guesses().get(i).unwrap_or_default();
        let guess = if lit {
            guess.green().bold().to_string()
        } else {
            guess.to_string()
        };

        writeln!(out, "{} Word {}: {}", slot_marker(lit), i + 1, entry.definition)?;
        writeln!(out, "    > {guess}")?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveDifficulties, MatchRule};
    use crate::corpus::Corpus;
    use crate::settings::{MemoryStore, Settings};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn game(corpus: &Corpus) -> Game<'_, MemoryStore, StdRng> {
        Game::with_rng(
            corpus,
            ActiveDifficulties::all(),
            MatchRule::Exact,
            Settings::new(MemoryStore::new()),
            StdRng::seed_from_u64(4),
        )
        .unwrap()
    }

    fn run(game: &mut Game<'_, MemoryStore, StdRng>, script: &str) -> String {
        let mut out = Vec::new();
        run_simple_with(game, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_plain_guess() {
        assert_eq!(
            parse_command("harvest", 3),
            Ok(SimpleCommand::Guess {
                slot: None,
                text: "harvest".into()
            })
        );
    }

    #[test]
    fn parse_numbered_guess() {
        assert_eq!(
            parse_command("2  horizon ", 3),
            Ok(SimpleCommand::Guess {
                slot: Some(1),
                text: "horizon".into()
            })
        );
        assert!(parse_command("4 horizon", 3).is_err());
        assert!(parse_command("0 horizon", 3).is_err());
    }

    #[test]
    fn parse_slash_commands() {
        assert_eq!(parse_command("/q", 3), Ok(SimpleCommand::Quit));
        assert_eq!(parse_command("/NEW", 3), Ok(SimpleCommand::NewCard));
        assert_eq!(parse_command("/reveal 3", 3), Ok(SimpleCommand::Reveal(2)));
        assert_eq!(
            parse_command("/level hard", 3),
            Ok(SimpleCommand::ToggleLevel(DifficultyLevel::Challenging))
        );
        assert_eq!(parse_command("", 3), Ok(SimpleCommand::Show));
        assert!(parse_command("/reveal", 3).is_err());
        assert!(parse_command("/level expert", 3).is_err());
        assert!(parse_command("/dance", 3).is_err());
    }

    #[test]
    fn reveal_all_and_quit() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus);

        let output = run(&mut game, "/reveal 1\n/reveal 2\n/reveal 3\n/quit\n");

        assert!(game.is_solved());
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn plain_guesses_advance_cursor() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus);
        let answers: Vec<String> = game
            .round()
            .card()
            .words
            .iter()
            .map(|entry| entry.word.clone())
            .collect();

        let script = format!("{}\n{}\n{}\n", answers[0], answers[1], answers[2]);
        let output = run(&mut game, &script);

        assert!(game.is_solved());
        assert_eq!(game.stats().cards_solved, 1);
        assert!(output.contains("All words found"));
    }

    #[test]
    fn last_level_cannot_be_turned_off() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus);

        let output = run(&mut game, "/level everyday\n/level intermediate\n/level challenging\n");

        assert_eq!(game.active(), &ActiveDifficulties::only(DifficultyLevel::Challenging));
        assert!(output.contains("only active level"));
    }

    #[test]
    fn bad_input_keeps_running() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus);

        let output = run(&mut game, "/dance\n/new\n");

        assert!(output.contains("unknown command"));
        assert_eq!(game.stats().cards_played, 2);
    }
}
