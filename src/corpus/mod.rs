//! Word corpora for the game
//!
//! Two corpus formats exist: a structured deck of authored cards tagged with
//! difficulty levels, and a flat alphabetical word list that cards are cut
//! from at selection time. Both are embedded into the binary.

mod embedded;
pub mod loader;

pub use embedded::{CARDS_JSON, WORDS, WORDS_COUNT};
pub use loader::CorpusError;

use crate::core::{Card, DifficultyLevel, MatchRule, WordEntry};
use rustc_hash::FxHashMap;

/// Authored cards partitioned by difficulty level
#[derive(Debug, Clone)]
pub struct StructuredCorpus {
    cards: Vec<Card>,
    by_level: FxHashMap<DifficultyLevel, Vec<usize>>,
}

impl StructuredCorpus {
    /// Build from validated cards
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if `cards` is empty or a card is invalid.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CorpusError> {
        loader::validate_cards(&cards)?;
        Ok(Self::index(cards))
    }

    /// Parse a JSON deck
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` on malformed JSON or an invalid card.
    pub fn from_json(text: &str) -> Result<Self, CorpusError> {
        loader::cards_from_json(text).map(Self::index)
    }

    fn index(cards: Vec<Card>) -> Self {
        let mut by_level: FxHashMap<DifficultyLevel, Vec<usize>> = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if let Some(level) = card.level {
                by_level.entry(level).or_default().push(i);
            }
        }
        Self { cards, by_level }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one level, in deck order
    pub fn cards_for(&self, level: DifficultyLevel) -> impl Iterator<Item = &Card> {
        self.level_indices(level).iter().map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn count_for(&self, level: DifficultyLevel) -> usize {
        self.level_indices(level).len()
    }

    /// The `n`th card of a level
    #[must_use]
    pub fn nth_for(&self, level: DifficultyLevel, n: usize) -> Option<&Card> {
        self.level_indices(level).get(n).map(|&i| &self.cards[i])
    }

    fn level_indices(&self, level: DifficultyLevel) -> &[usize] {
        self.by_level.get(&level).map_or(&[], Vec::as_slice)
    }
}

/// Ordered word entries with no level information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatCorpus {
    entries: Vec<WordEntry>,
}

impl FlatCorpus {
    /// Wrap entries as-is, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if there are no entries.
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, CorpusError> {
        if entries.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { entries })
    }

    /// Parse delimited text
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` on the first malformed line.
    pub fn from_delimited(text: &str, delimiter: char) -> Result<Self, CorpusError> {
        loader::entries_from_delimited(text, delimiter).map(|entries| Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

/// A loaded corpus of either format
#[derive(Debug, Clone)]
pub enum Corpus {
    Structured(StructuredCorpus),
    Flat(FlatCorpus),
}

impl Corpus {
    /// The embedded structured deck
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if the embedded deck is invalid.
    pub fn embedded_cards() -> Result<Self, CorpusError> {
        let corpus = StructuredCorpus::from_json(CARDS_JSON)?;
        tracing::debug!(cards = corpus.cards().len(), "loaded embedded card deck");
        Ok(Self::Structured(corpus))
    }

    /// The embedded flat word list
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if an embedded line is malformed.
    pub fn embedded_words() -> Result<Self, CorpusError> {
        let corpus = FlatCorpus::from_entries(loader::entries_from_slice(WORDS)?)?;
        tracing::debug!(entries = corpus.entries().len(), "loaded embedded word list");
        Ok(Self::Flat(corpus))
    }

    /// Number of cards (structured) or entries (flat)
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Structured(c) => c.cards().len(),
            Self::Flat(c) => c.entries().len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the corpus partitions cards by level
    #[must_use]
    pub const fn has_levels(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Comparison rule used for guesses unless overridden
    ///
    /// Authored decks compare exactly; the flat list ignores case.
    #[must_use]
    pub const fn default_rule(&self) -> MatchRule {
        match self {
            Self::Structured(_) => MatchRule::Exact,
            Self::Flat(_) => MatchRule::IgnoreCase,
        }
    }
}
