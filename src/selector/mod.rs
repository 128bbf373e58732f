//! Puzzle selection
//!
//! One policy per corpus format: a level-filtered random pick over the
//! structured deck, and a same-letter window search over the flat list.

pub mod level;
pub mod window;

pub use level::pick_card;
pub use window::{WINDOW_LEN, find_window, pick_words};

use crate::core::{ActiveDifficulties, Card};
use crate::corpus::Corpus;
use rand::Rng;

/// Errors raised when no card can be drawn
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no cards available for levels: {active}")]
    NoCardsForLevels { active: ActiveDifficulties },

    #[error("no {WINDOW_LEN} consecutive words share a first letter (corpus has {len} entries)")]
    NoQualifyingWindow { len: usize },
}

/// Draw a fresh card from either corpus format
///
/// The active difficulties only apply to the structured deck.
///
/// # Errors
///
/// Returns `SelectError` if the corpus has nothing playable under the filter.
///
/// # Examples
/// ```
/// use word_sweep::core::ActiveDifficulties;
/// use word_sweep::corpus::Corpus;
/// use word_sweep::selector::pick;
///
/// let corpus = Corpus::embedded_cards().unwrap();
/// let card = pick(&corpus, &ActiveDifficulties::all(), &mut rand::rng()).unwrap();
/// assert!(card.letters_match());
/// ```
pub fn pick<R: Rng + ?Sized>(
    corpus: &Corpus,
    active: &ActiveDifficulties,
    rng: &mut R,
) -> Result<Card, SelectError> {
    match corpus {
        Corpus::Structured(deck) => pick_card(deck, active, rng).cloned(),
        Corpus::Flat(list) => pick_words(list, rng),
    }
}
