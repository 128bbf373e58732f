//! Word Sweep
//!
//! A first-letter word guessing game: each card shows a letter and up to three
//! definitions, and the player types the words they describe.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_sweep::core::{ActiveDifficulties, MatchRule};
//! use word_sweep::corpus::Corpus;
//! use word_sweep::game::Game;
//! use word_sweep::settings::{MemoryStore, Settings};
//!
//! let corpus = Corpus::embedded_cards().unwrap();
//! let settings = Settings::new(MemoryStore::new());
//! let mut game = Game::new(&corpus, ActiveDifficulties::all(), MatchRule::Exact, settings).unwrap();
//!
//! game.reveal(0).unwrap();
//! println!("Slot 1 correct: {}", game.round().is_slot_correct(0));
//! ```

// Core domain types
pub mod core;

// Crate-level error
pub mod error;
pub use error::{Error, Result};

// Puzzle selection policies
pub mod selector;

// Word corpora
pub mod corpus;

// Persisted settings
pub mod settings;

// Game session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
