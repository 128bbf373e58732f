//! Same-letter window search over the flat word list
//!
//! The flat list carries no levels, so cards are cut from it at selection
//! time: three consecutive entries starting with the same letter.

use super::SelectError;
use crate::core::{Card, WordEntry};
use crate::corpus::FlatCorpus;
use rand::Rng;

/// Number of consecutive entries in a card cut from the flat list
pub const WINDOW_LEN: usize = 3;

fn qualifies(window: &[WordEntry]) -> bool {
    let Some(letter) = window.first().and_then(WordEntry::initial) else {
        return false;
    };
    window.iter().all(|entry| entry.initial() == Some(letter))
}

/// Find the start of a qualifying window, searching outward from `start`
///
/// Windows are tried downward from `start` to the first entry, then upward
/// from `start + 1` to the last full window. Each window is examined at most
/// once. `start` past the last full window is clamped to it.
///
/// # Examples
/// ```
/// use word_sweep::core::WordEntry;
/// use word_sweep::selector::find_window;
///
/// let entries: Vec<WordEntry> = ["bat", "cat", "cow", "cub", "dog"]
///     .iter()
///     .map(|w| WordEntry::new(*w, ""))
///     .collect();
/// assert_eq!(find_window(&entries, 0), Some(1));
/// assert_eq!(find_window(&entries, 2), Some(1));
/// ```
#[must_use]
pub fn find_window(entries: &[WordEntry], start: usize) -> Option<usize> {
    let last = entries.len().checked_sub(WINDOW_LEN)?;
    let start = start.min(last);

    (0..=start)
        .rev()
        .chain(start + 1..=last)
        .find(|&i| qualifies(&entries[i..i + WINDOW_LEN]))
}

/// Cut a random card from the flat list
///
/// A start index is drawn uniformly over all full windows and the search
/// runs outward from there. The card's letter is the first word's initial,
/// uppercased.
///
/// # Errors
///
/// Returns `SelectError::NoQualifyingWindow` if the list is shorter than a
/// window or no window qualifies.
pub fn pick_words<R: Rng + ?Sized>(list: &FlatCorpus, rng: &mut R) -> Result<Card, SelectError> {
    let entries = list.entries();
    let not_found = || SelectError::NoQualifyingWindow { len: entries.len() };

    let last_start = entries.len().checked_sub(WINDOW_LEN).ok_or_else(not_found)?;
    let start = rng.random_range(0..=last_start);
    let found = find_window(entries, start).ok_or_else(not_found)?;
    tracing::debug!(start, found, "found same-letter window");

    Card::from_window(&entries[found..found + WINDOW_LEN]).ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words.iter().map(|w| WordEntry::new(*w, format!("meaning of {w}"))).collect()
    }

    fn list(words: &[&str]) -> FlatCorpus {
        FlatCorpus::from_entries(entries(words)).unwrap()
    }

    fn words_of(card: &Card) -> Vec<&str> {
        card.words.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn window_at_start_found_from_anywhere() {
        let words = entries(&["ant", "axe", "apple", "bat", "cow", "dog", "eel"]);
        for start in 0..words.len() + 2 {
            assert_eq!(find_window(&words, start), Some(0), "start {start}");
        }
    }

    #[test]
    fn window_at_end_found_from_anywhere() {
        let words = entries(&["ant", "bat", "cow", "dog", "eel", "elk", "emu"]);
        for start in 0..words.len() + 2 {
            assert_eq!(find_window(&words, start), Some(4), "start {start}");
        }
    }

    #[test]
    fn search_prefers_downward() {
        let words = entries(&["ant", "axe", "apple", "bat", "cow", "cub", "cat"]);
        assert_eq!(find_window(&words, 3), Some(0));
        assert_eq!(find_window(&words, 4), Some(4));
    }

    #[test]
    fn two_matching_words_are_not_enough() {
        let words = entries(&["ant", "axe", "bat"]);
        assert_eq!(find_window(&words, 0), None);
    }

    #[test]
    fn short_lists_have_no_window() {
        assert_eq!(find_window(&entries(&[]), 0), None);
        assert_eq!(find_window(&entries(&["ant", "axe"]), 5), None);
    }

    #[test]
    fn initials_compare_case_insensitively() {
        let words = entries(&["Ant", "axe", "APPLE"]);
        assert_eq!(find_window(&words, 0), Some(0));
    }

    #[test]
    fn mismatched_middle_entry_rejected() {
        let words = entries(&["ant", "bat", "axe"]);
        assert_eq!(find_window(&words, 0), None);
    }

    #[test]
    fn pick_words_returns_same_letter_triple() {
        let corpus = list(&[
            "ant", "axe", "bat", "cow", "cub", "cup", "dog", "eel", "elk", "emu", "fox",
        ]);
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..100 {
            let card = pick_words(&corpus, &mut rng).unwrap();
            let words = words_of(&card);
            assert_eq!(words.len(), WINDOW_LEN);

            let letter = words[0].chars().next().unwrap();
            assert!(words.iter().all(|w| w.starts_with(letter)), "{words:?}");
            assert_eq!(card.first_letter, letter.to_ascii_uppercase());
        }
    }

    #[test]
    fn pick_words_reaches_both_windows() {
        let corpus = list(&[
            "ant", "axe", "bat", "cow", "cub", "cup", "dog", "eel", "elk", "emu", "fox",
        ]);
        let mut rng = StdRng::seed_from_u64(23);

        let letters: Vec<char> = (0..200)
            .map(|_| pick_words(&corpus, &mut rng).unwrap().first_letter)
            .collect();
        assert!(letters.contains(&'C'));
        assert!(letters.contains(&'E'));
    }

    #[test]
    fn pick_words_guaranteed_triple() {
        let corpus = list(&["ant", "axe", "apple", "bat"]);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..20 {
            let card = pick_words(&corpus, &mut rng).unwrap();
            assert_eq!(words_of(&card), vec!["ant", "axe", "apple"]);
            assert_eq!(card.first_letter, 'A');
        }
    }

    #[test]
    fn pick_words_without_window_errors() {
        let corpus = list(&["ant", "axe", "bat"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pick_words(&corpus, &mut rng),
            Err(SelectError::NoQualifyingWindow { len: 3 })
        );

        let short = list(&["ant", "axe"]);
        assert_eq!(
            pick_words(&short, &mut rng),
            Err(SelectError::NoQualifyingWindow { len: 2 })
        );
    }

    #[test]
    fn accented_initials_ignore_case() {
        let words = ["Éclair", "éclat", "écrou"];
        assert_eq!(find_window(&entries(&words), 0), Some(0));

        let mut rng = StdRng::seed_from_u64(5);
        let card = pick_words(&list(&words), &mut rng).unwrap();
        assert_eq!(card.first_letter, 'É');
        assert!(card.letters_match());
    }

    #[test]
    fn embedded_list_always_yields_a_card() {
        let crate::corpus::Corpus::Flat(corpus) = crate::corpus::Corpus::embedded_words().unwrap()
        else {
            panic!("expected a flat corpus");
        };
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let card = pick_words(&corpus, &mut rng).unwrap();
            assert!(card.letters_match());
        }
    }
}
