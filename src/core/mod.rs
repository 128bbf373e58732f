//! Core domain types for the word game
//!
//! Cards, the difficulty filter and guess tracking. Everything here is pure
//! state with no I/O.

mod card;
mod difficulty;
mod guess;

pub use card::{
    Card, DifficultyLevel, MAX_WORDS_PER_CARD, UnknownLevel, WordEntry, display_letter, fold_letter,
};
pub use difficulty::{ActiveDifficulties, DifficultiesError};
pub use guess::{GuessError, GuessState, MatchRule, Round, highlights};
