//! Corpus summary command
//!
//! Counts what a corpus offers: cards per level for the structured deck,
//! playable windows for the flat list, and the letters covered.

use crate::core::{Card, DifficultyLevel, display_letter};
use crate::corpus::Corpus;
use crate::selector::{WINDOW_LEN, find_window};
use std::collections::BTreeSet;

/// Result of summarizing a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSummary {
    pub format: &'static str,
    /// Cards (structured) or entries (flat)
    pub total: usize,
    pub words: usize,
    pub per_level: Vec<(DifficultyLevel, usize)>,
    /// Same-letter windows available in a flat list
    pub windows: Option<usize>,
    pub letters: Vec<char>,
}

/// Summarize a corpus
#[must_use]
pub fn summarize(corpus: &Corpus) -> CorpusSummary {
    match corpus {
        Corpus::Structured(deck) => {
            let letters: BTreeSet<char> = deck
                .cards()
                .iter()
                .map(|card| display_letter(card.first_letter))
                .collect();

            CorpusSummary {
                format: "structured",
                total: deck.cards().len(),
                words: deck.cards().iter().map(Card::len).sum(),
                per_level: DifficultyLevel::ALL
                    .iter()
                    .map(|&level| (level, deck.count_for(level)))
                    .collect(),
                windows: None,
                letters: letters.into_iter().collect(),
            }
        }
        Corpus::Flat(list) => {
            let entries = list.entries();
            let playable: Vec<_> = entries
                .windows(WINDOW_LEN)
                .filter(|window| find_window(window, 0) == Some(0))
                .collect();
            let windows = playable.len();

            // Letters a card can actually be drawn for
            let letters: BTreeSet<char> = playable
                .iter()
                .filter_map(|window| window[0].initial())
                .map(display_letter)
                .collect();

            CorpusSummary {
                format: "flat",
                total: entries.len(),
                words: entries.len(),
                per_level: Vec::new(),
                windows: Some(windows),
                letters: letters.into_iter().collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::corpus::FlatCorpus;

    #[test]
    fn summarize_embedded_deck() {
        let corpus = Corpus::embedded_cards().unwrap();
        let summary = summarize(&corpus);

        assert_eq!(summary.format, "structured");
        assert_eq!(summary.total, corpus.len());
        assert_eq!(summary.per_level.len(), 3);
        assert_eq!(
            summary.per_level.iter().map(|(_, n)| n).sum::<usize>(),
            summary.total
        );
        assert!(summary.words >= summary.total);
        assert_eq!(summary.windows, None);
    }

    #[test]
    fn summarize_flat_counts_windows() {
        let entries = ["ant", "axe", "apple", "bat", "cow", "cub", "cup", "cat"]
            .iter()
            .map(|w| WordEntry::new(*w, ""))
            .collect();
        let corpus = Corpus::Flat(FlatCorpus::from_entries(entries).unwrap());
        let summary = summarize(&corpus);

        assert_eq!(summary.format, "flat");
        assert_eq!(summary.total, 8);
        // ant-axe-apple, cow-cub-cup, cub-cup-cat
        assert_eq!(summary.windows, Some(3));
        assert_eq!(summary.letters, vec!['A', 'C']);
        assert!(summary.per_level.is_empty());
    }
}
