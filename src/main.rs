//! Word Sweep - CLI
//!
//! First-letter word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_sweep::{
    commands::{apply_settings, parse_switch, run_simple, summarize},
    core::{ActiveDifficulties, MatchRule},
    corpus::{Corpus, loader::load_from_file},
    game::Game,
    output::{print_card, print_settings, print_summary},
    selector,
    settings::{FileStore, KeyValueStore, MemoryStore, Settings},
};

/// Environment variable holding the log filter
const LOG_ENV: &str = "WORD_SWEEP_LOG";

#[derive(Parser)]
#[command(
    name = "word_sweep",
    about = "Guess the words behind each definition; every word starts with the same letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus: 'cards' (default, leveled cards), 'words' (flat word list), or path to file
    #[arg(short, long, global = true, default_value = "cards")]
    corpus: String,

    /// Initial difficulty levels, comma separated (e.g. "everyday,challenging") or "all"
    #[arg(short, long, global = true, default_value_t = ActiveDifficulties::all())]
    levels: ActiveDifficulties,

    /// Answer matching: exact or ignore-case (default depends on the corpus)
    #[arg(short, long = "match", global = true)]
    match_rule: Option<MatchRule>,

    /// Keep settings in memory instead of the settings file
    #[arg(long, global = true)]
    no_save: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Print one random card
    Card {
        /// Show the answers instead of letter hints
        #[arg(short, long)]
        reveal: bool,
    },

    /// Show corpus statistics
    Summary,

    /// Show or change saved settings
    Settings {
        /// Turn easy mode on or off
        #[arg(short, long, value_parser = parse_switch)]
        easy_mode: Option<bool>,
    },
}

/// Load the corpus named by the --corpus flag
///
/// - "cards": embedded leveled cards
/// - "words": embedded flat word list
/// - "<path>": `.json` card file or delimited word list
fn load_corpus(corpus_mode: &str) -> word_sweep::Result<Corpus> {
    let corpus = match corpus_mode {
        "cards" => Corpus::embedded_cards()?,
        "words" => Corpus::embedded_words()?,
        path => load_from_file(path)?,
    };
    Ok(corpus)
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let corpus = load_corpus(&cli.corpus)
        .with_context(|| format!("failed to load corpus '{}'", cli.corpus))?;
    tracing::info!(entries = corpus.len(), levels = corpus.has_levels(), "corpus loaded");

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // These never touch settings
    match command {
        Commands::Card { reveal } => {
            let card = selector::pick(&corpus, &cli.levels, &mut rand::rng())?;
            print_card(&card, *reveal);
            return Ok(());
        }
        Commands::Summary => {
            print_summary(&summarize(&corpus));
            return Ok(());
        }
        _ => {}
    }

    if cli.no_save {
        return run(&cli, command, &corpus, MemoryStore::new(), None);
    }

    let path = FileStore::default_path().context("failed to locate settings")?;
    let store = if matches!(command, Commands::Settings { .. }) {
        FileStore::open(path).context("failed to open settings")?
    } else {
        FileStore::open_or_empty(path)
    };
    let location = store.path().display().to_string();
    run(&cli, command, &corpus, store, Some(location))
}

fn run<S: KeyValueStore>(
    cli: &Cli,
    command: &Commands,
    corpus: &Corpus,
    store: S,
    location: Option<String>,
) -> Result<()> {
    let rule = cli.match_rule.unwrap_or_else(|| corpus.default_rule());
    let mut settings = Settings::new(store);

    match command {
        Commands::Play => {
            use word_sweep::interactive::{App, run_tui};

            let game = Game::new(corpus, cli.levels, rule, settings)?;
            run_tui(App::new(game, location))
        }
        Commands::Simple => {
            let mut game = Game::new(corpus, cli.levels, rule, settings)?;
            run_simple(&mut game)
        }
        Commands::Card { .. } | Commands::Summary => Ok(()),
        Commands::Settings { easy_mode } => {
            let report = apply_settings(&mut settings, *easy_mode, location)?;
            print_settings(&report);
            Ok(())
        }
    }
}
