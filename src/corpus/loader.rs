//! Corpus loading utilities
//!
//! Parses the structured JSON deck and the flat delimited word file, from
//! embedded constants or from disk.

use super::{Corpus, FlatCorpus, StructuredCorpus};
use crate::core::{Card, WordEntry, fold_letter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Field separator of the flat corpus
pub const DELIMITER: char = '|';

/// Errors raised while loading a corpus
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid card deck: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: expected at least 3 '{delimiter}'-separated fields, got {found}")]
    MissingFields {
        line: usize,
        delimiter: char,
        found: usize,
    },

    #[error("line {line}: empty word")]
    EmptyWord { line: usize },

    #[error("card {index}: has {count} words, expected 1 to 3")]
    WordCount { index: usize, count: usize },

    #[error("card {index}: missing difficulty level")]
    MissingLevel { index: usize },

    #[error("card {index}: word '{word}' does not start with '{letter}'")]
    LetterMismatch {
        index: usize,
        word: String,
        letter: char,
    },

    #[error("corpus is empty")]
    Empty,
}

/// Parse one flat-corpus line
///
/// The word is the first field and the definition the third; the second
/// field (part of speech) is ignored. Returns `Ok(None)` for blank and
/// comment lines.
///
/// # Errors
///
/// Returns `CorpusError` if the line has fewer than three fields or an empty word.
pub fn parse_line(line: &str, line_no: usize, delimiter: char) -> Result<Option<WordEntry>, CorpusError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split(delimiter).map(str::trim).collect();
    if fields.len() < 3 {
        return Err(CorpusError::MissingFields {
            line: line_no,
            delimiter,
            found: fields.len(),
        });
    }
    if fields[0].is_empty() {
        return Err(CorpusError::EmptyWord { line: line_no });
    }

    Ok(Some(WordEntry::new(fields[0], fields[2])))
}

/// Parse the flat corpus from text
///
/// # Errors
///
/// Returns `CorpusError` on the first malformed line, or if no entries remain.
///
/// # Examples
/// ```
/// use word_sweep::corpus::loader::entries_from_delimited;
///
/// let entries = entries_from_delimited("ant|n|a small insect\naxe|n|a tool", '|').unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].definition, "a tool");
/// ```
pub fn entries_from_delimited(text: &str, delimiter: char) -> Result<Vec<WordEntry>, CorpusError> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(entry) = parse_line(line, i + 1, delimiter)? {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(entries)
}

/// Convert embedded lines to word entries
///
/// # Errors
///
/// Returns `CorpusError` on the first malformed line, or if the slice is empty.
pub fn entries_from_slice(lines: &[&str]) -> Result<Vec<WordEntry>, CorpusError> {
    let mut entries = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if let Some(entry) = parse_line(line, i + 1, DELIMITER)? {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(entries)
}

/// Parse and validate the structured card deck
///
/// Every card needs a level, 1 to 3 words, and words starting with its letter.
///
/// # Errors
///
/// Returns `CorpusError` on malformed JSON or the first invalid card.
pub fn cards_from_json(text: &str) -> Result<Vec<Card>, CorpusError> {
    let cards: Vec<Card> = serde_json::from_str(text)?;
    validate_cards(&cards)?;
    Ok(cards)
}

/// Check the invariants every structured card must hold
pub(crate) fn validate_cards(cards: &[Card]) -> Result<(), CorpusError> {
    if cards.is_empty() {
        return Err(CorpusError::Empty);
    }

    for (index, card) in cards.iter().enumerate() {
        if card.level.is_none() {
            return Err(CorpusError::MissingLevel { index });
        }
        if card.is_empty() || card.len() > crate::core::MAX_WORDS_PER_CARD {
            return Err(CorpusError::WordCount {
                index,
                count: card.len(),
            });
        }
        if let Some(entry) = card
            .words
            .iter()
            .find(|entry| entry.initial() != Some(fold_letter(card.first_letter)))
        {
            return Err(CorpusError::LetterMismatch {
                index,
                word: entry.word.clone(),
                letter: card.first_letter,
            });
        }
    }

    Ok(())
}

/// Load a corpus from a file
///
/// Files ending in `.json` are read as a structured deck, anything else as a
/// flat delimited word list.
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read or does not parse.
///
/// # Examples
/// ```no_run
/// use word_sweep::corpus::loader::load_from_file;
///
/// let corpus = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let corpus = if is_json {
        Corpus::Structured(StructuredCorpus::from_json(&content)?)
    } else {
        Corpus::Flat(FlatCorpus::from_delimited(&content, DELIMITER)?)
    };

    tracing::info!(path = %path.display(), entries = corpus.len(), "loaded corpus from file");
    Ok(corpus)
}
