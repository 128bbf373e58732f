//! Embedded corpora
//!
//! Corpora compiled into the binary at build time.

// Include generated flat word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Structured card deck with difficulty levels
pub const CARDS_JSON: &str = include_str!("../../data/cards.json");
