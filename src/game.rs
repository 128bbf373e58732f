//! Game session
//!
//! Ties a corpus, the difficulty filter, the current round and the player's
//! settings together. Front-ends drive a [`Game`] and only render its state.

use crate::core::{ActiveDifficulties, DifficultyLevel, GuessError, MatchRule, Round, highlights};
use crate::corpus::Corpus;
use crate::selector::{self, SelectError};
use crate::settings::{KeyValueStore, Settings, StoreError};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Session counters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub cards_played: usize,
    /// Cards completed without using reveal
    pub cards_solved: usize,
    pub reveals: usize,
}

/// A play session over one corpus
pub struct Game<'c, S: KeyValueStore, R: Rng = ThreadRng> {
    corpus: &'c Corpus,
    active: ActiveDifficulties,
    rule: MatchRule,
    round: Round,
    settings: Settings<S>,
    rng: R,
    stats: Statistics,
    revealed_this_card: bool,
    counted_this_card: bool,
}

impl<'c, S: KeyValueStore> Game<'c, S> {
    /// Start a session using the thread-local random generator
    ///
    /// # Errors
    ///
    /// Returns `SelectError` if no first card can be drawn.
    pub fn new(
        corpus: &'c Corpus,
        active: ActiveDifficulties,
        rule: MatchRule,
        settings: Settings<S>,
    ) -> Result<Self, SelectError> {
        Self::with_rng(corpus, active, rule, settings, rand::rng())
    }
}

impl<'c, S: KeyValueStore, R: Rng> Game<'c, S, R> {
    /// Start a session with an explicit random generator
    ///
    /// # Errors
    ///
    /// Returns `SelectError` if no first card can be drawn.
    pub fn with_rng(
        corpus: &'c Corpus,
        active: ActiveDifficulties,
        rule: MatchRule,
        settings: Settings<S>,
        mut rng: R,
    ) -> Result<Self, SelectError> {
        let card = selector::pick(corpus, &active, &mut rng)?;
        Ok(Self {
            corpus,
            active,
            rule,
            round: Round::new(card, rule),
            settings,
            rng,
            stats: Statistics {
                cards_played: 1,
                ..Statistics::default()
            },
            revealed_this_card: false,
            counted_this_card: false,
        })
    }

    #[must_use]
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn active(&self) -> &ActiveDifficulties {
        &self.active
    }

    #[must_use]
    pub const fn rule(&self) -> MatchRule {
        self.rule
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn easy_mode(&self) -> bool {
        self.settings.easy_mode()
    }

    /// Which slots currently render as correct
    #[must_use]
    pub fn highlights(&self) -> Vec<bool> {
        highlights(&self.round, self.settings.easy_mode())
    }

    /// Whether the current card is fully solved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.round.is_all_correct()
    }

    /// Replace the card with a fresh draw under the current filter
    ///
    /// The old round is kept if no card can be drawn.
    ///
    /// # Errors
    ///
    /// Returns `SelectError` if the corpus has nothing playable.
    pub fn new_card(&mut self) -> Result<(), SelectError> {
        let card = selector::pick(self.corpus, &self.active, &mut self.rng)?;
        tracing::debug!(letter = %card.first_letter, level = ?card.level, "new card");

        self.round = Round::new(card, self.rule);
        self.stats.cards_played += 1;
        self.revealed_this_card = false;
        self.counted_this_card = false;
        Ok(())
    }

    /// Toggle a difficulty level without touching the current card
    ///
    /// Returns `false` if the toggle was refused (last active level).
    pub fn toggle_difficulty(&mut self, level: DifficultyLevel) -> bool {
        self.active.toggle(level)
    }

    /// Replace a slot's value
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn set_slot(&mut self, index: usize, value: impl Into<String>) -> Result<(), GuessError> {
        self.round.set_slot(index, value)?;
        self.note_progress();
        Ok(())
    }

    /// Type one character into a slot
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn push_char(&mut self, index: usize, c: char) -> Result<(), GuessError> {
        self.round.push_char(index, c)?;
        self.note_progress();
        Ok(())
    }

    /// Delete the last character of a slot
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn pop_char(&mut self, index: usize) -> Result<(), GuessError> {
        self.round.pop_char(index)?;
        self.note_progress();
        Ok(())
    }

    /// Reveal a slot's answer
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn reveal(&mut self, index: usize) -> Result<(), GuessError> {
        self.round.reveal(index)?;
        self.stats.reveals += 1;
        self.revealed_this_card = true;
        self.note_progress();
        Ok(())
    }

    /// Flip easy mode and persist it
    ///
    /// Returns the new value; the value sticks for the session even when the
    /// save fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the setting could not be saved.
    pub fn toggle_easy_mode(&mut self) -> Result<bool, StoreError> {
        let (enabled, saved) = self.settings.toggle_easy_mode();
        tracing::info!(enabled, "easy mode changed");
        saved.map(|()| enabled)
    }

    /// Set easy mode explicitly
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the setting could not be saved.
    pub fn set_easy_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.settings.set_easy_mode(enabled)
    }

    fn note_progress(&mut self) {
        if !self.counted_this_card && self.round.is_all_correct() {
            self.counted_this_card = true;
            if !self.revealed_this_card {
                self.stats.cards_solved += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(corpus: &Corpus, active: ActiveDifficulties) -> Game<'_, MemoryStore, StdRng> {
        Game::with_rng(
            corpus,
            active,
            corpus.default_rule(),
            Settings::new(MemoryStore::new()),
            StdRng::seed_from_u64(8),
        )
        .unwrap()
    }

    fn type_answer(game: &mut Game<'_, MemoryStore, StdRng>, index: usize) {
        let answer = game.round().card().target(index).unwrap().to_string();
        game.set_slot(index, answer).unwrap();
    }

    #[test]
    fn starts_with_empty_round() {
        let corpus = Corpus::embedded_cards().unwrap();
        let game = game(&corpus, ActiveDifficulties::all());

        assert!(game.round().guesses().iter().all(str::is_empty));
        assert_eq!(game.stats().cards_played, 1);
        assert!(!game.is_solved());
    }

    #[test]
    fn toggling_difficulty_keeps_card() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());
        game.set_slot(0, "typed").unwrap();
        let before = game.round().clone();

        assert!(game.toggle_difficulty(DifficultyLevel::Everyday));
        assert!(game.toggle_difficulty(DifficultyLevel::Intermediate));
        assert!(!game.toggle_difficulty(DifficultyLevel::Challenging));

        assert_eq!(game.round(), &before);
        assert_eq!(game.active(), &ActiveDifficulties::only(DifficultyLevel::Challenging));
    }

    #[test]
    fn new_card_uses_current_filter_and_resets_guesses() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());
        game.toggle_difficulty(DifficultyLevel::Everyday);
        game.toggle_difficulty(DifficultyLevel::Intermediate);
        game.set_slot(0, "typed").unwrap();

        for _ in 0..20 {
            game.new_card().unwrap();
            assert_eq!(game.round().card().level, Some(DifficultyLevel::Challenging));
            assert!(game.round().guesses().iter().all(str::is_empty));
        }
        assert_eq!(game.stats().cards_played, 21);
    }

    #[test]
    fn solving_counts_once() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());

        for i in 0..game.round().card().len() {
            type_answer(&mut game, i);
        }
        assert!(game.is_solved());
        assert_eq!(game.stats().cards_solved, 1);

        // Re-typing the same answer does not count again
        type_answer(&mut game, 0);
        assert_eq!(game.stats().cards_solved, 1);
    }

    #[test]
    fn revealed_cards_are_not_counted_as_solved() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());

        for i in 0..game.round().card().len() {
            game.reveal(i).unwrap();
        }
        assert!(game.is_solved());
        assert_eq!(game.stats().cards_solved, 0);
        assert_eq!(game.stats().reveals, game.round().card().len());
    }

    #[test]
    fn highlights_follow_easy_mode() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());
        type_answer(&mut game, 0);

        let len = game.round().card().len();
        if len > 1 {
            assert!(game.highlights().iter().all(|&h| !h));
        }

        assert!(game.toggle_easy_mode().unwrap());
        assert!(game.highlights()[0]);
    }

    #[test]
    fn flat_corpus_game_ignores_case() {
        let corpus = Corpus::embedded_words().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());
        assert_eq!(game.rule(), MatchRule::IgnoreCase);

        let answer = game.round().card().target(1).unwrap().to_uppercase();
        game.set_slot(1, answer).unwrap();
        assert!(game.round().is_slot_correct(1));
    }

    #[test]
    fn out_of_range_slot_errors() {
        let corpus = Corpus::embedded_cards().unwrap();
        let mut game = game(&corpus, ActiveDifficulties::all());
        assert!(game.set_slot(9, "x").is_err());
        assert!(game.reveal(9).is_err());
        assert_eq!(game.stats().reveals, 0);
    }
}
