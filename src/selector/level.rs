//! Level-filtered random pick over the structured deck

use super::SelectError;
use crate::core::{ActiveDifficulties, Card, DifficultyLevel};
use crate::corpus::StructuredCorpus;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a random card from the active levels
///
/// A level is chosen uniformly from the active set (not weighted by how many
/// cards it holds), then a card uniformly from that level. Levels with no
/// cards in the deck are passed over.
///
/// # Errors
///
/// Returns `SelectError::NoCardsForLevels` if every active level is empty.
pub fn pick_card<'c, R: Rng + ?Sized>(
    deck: &'c StructuredCorpus,
    active: &ActiveDifficulties,
    rng: &mut R,
) -> Result<&'c Card, SelectError> {
    let playable: Vec<DifficultyLevel> = active
        .iter()
        .filter(|&level| deck.count_for(level) > 0)
        .collect();

    let no_cards = || SelectError::NoCardsForLevels { active: *active };

    let &level = playable.choose(rng).ok_or_else(no_cards)?;
    tracing::debug!(%level, from = %active, "picked level");

    let n = rng.random_range(0..deck.count_for(level));
    deck.nth_for(level, n).ok_or_else(no_cards)
}
