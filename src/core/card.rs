//! Puzzle cards and their words
//!
//! A card is a target first letter plus a short ordered list of word/definition pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of words a card may hold
pub const MAX_WORDS_PER_CARD: usize = 3;

/// A single word to guess together with the clue shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub definition: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// First character of the word, lowercased
    ///
    /// Returns `None` for an empty word.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.word.chars().next().map(fold_letter)
    }
}

/// Lowercase a letter for comparison, keeping non-ASCII letters intact
#[must_use]
pub fn fold_letter(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Uppercase a letter for display
#[must_use]
pub fn display_letter(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Difficulty category partitioning the structured corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Everyday,
    Intermediate,
    Challenging,
}

impl DifficultyLevel {
    /// All levels in display order
    pub const ALL: [Self; 3] = [Self::Everyday, Self::Intermediate, Self::Challenging];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Everyday => "everyday",
            Self::Intermediate => "intermediate",
            Self::Challenging => "challenging",
        }
    }

    /// Position in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Everyday => 0,
            Self::Intermediate => 1,
            Self::Challenging => 2,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized difficulty name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty level '{0}' (expected everyday, intermediate or challenging)")]
pub struct UnknownLevel(pub String);

impl FromStr for DifficultyLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "everyday" | "easy" => Ok(Self::Everyday),
            "intermediate" | "medium" => Ok(Self::Intermediate),
            "challenging" | "hard" => Ok(Self::Challenging),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// One puzzle instance
///
/// Cards from the structured corpus carry a level and an authored first
/// letter. Cards cut from the flat corpus have no level and derive the letter
/// from their first word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<DifficultyLevel>,
    pub first_letter: char,
    pub words: Vec<WordEntry>,
}

impl Card {
    #[must_use]
    pub const fn new(level: Option<DifficultyLevel>, first_letter: char, words: Vec<WordEntry>) -> Self {
        Self {
            level,
            first_letter,
            words,
        }
    }

    /// Build a card from consecutive flat-corpus entries
    ///
    /// The letter is the first word's initial, uppercased for display.
    /// Returns `None` if `words` is empty or the first word is empty.
    #[must_use]
    pub fn from_window(words: &[WordEntry]) -> Option<Self> {
        let first_letter = display_letter(words.first()?.word.chars().next()?);
        Some(Self::new(None, first_letter, words.to_vec()))
    }

    /// Number of guess slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Target word for a slot
    #[must_use]
    pub fn target(&self, slot: usize) -> Option<&str> {
        self.words.get(slot).map(|entry| entry.word.as_str())
    }

    /// Check that every word starts with the card's letter (case-insensitive)
    #[must_use]
    pub fn letters_match(&self) -> bool {
        let letter = fold_letter(self.first_letter);
        self.words
            .iter()
            .all(|entry| entry.initial() == Some(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, format!("definition of {word}"))
    }

    #[test]
    fn level_names_round_trip() {
        for level in DifficultyLevel::ALL {
            assert_eq!(level.name().parse::<DifficultyLevel>().unwrap(), level);
        }
    }

    #[test]
    fn level_parse_accepts_aliases_and_case() {
        assert_eq!("HARD".parse::<DifficultyLevel>().unwrap(), DifficultyLevel::Challenging);
        assert_eq!(" Everyday ".parse::<DifficultyLevel>().unwrap(), DifficultyLevel::Everyday);
        assert!("expert".parse::<DifficultyLevel>().is_err());
    }

    #[test]
    fn level_index_matches_all_order() {
        for (i, level) in DifficultyLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn card_deserializes_camel_case() {
        let json = r#"{
            "level": "intermediate",
            "firstLetter": "H",
            "words": [{"word": "harvest", "definition": "The gathering of crops"}]
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.level, Some(DifficultyLevel::Intermediate));
        assert_eq!(card.first_letter, 'H');
        assert_eq!(card.target(0), Some("harvest"));
        assert_eq!(card.target(1), None);
    }

    #[test]
    fn from_window_uppercases_letter() {
        let card = Card::from_window(&[entry("ant"), entry("axe"), entry("apple")]).unwrap();
        assert_eq!(card.first_letter, 'A');
        assert_eq!(card.level, None);
        assert_eq!(card.len(), 3);
    }

    #[test]
    fn from_window_rejects_empty() {
        assert!(Card::from_window(&[]).is_none());
        assert!(Card::from_window(&[entry("")]).is_none());
    }

    #[test]
    fn letters_match_is_case_insensitive() {
        let card = Card::new(None, 'b', vec![entry("Bread"), entry("bottle")]);
        assert!(card.letters_match());

        let bad = Card::new(None, 'B', vec![entry("bread"), entry("cake")]);
        assert!(!bad.letters_match());
    }
}
