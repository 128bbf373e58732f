//! Guess tracking for the current card
//!
//! Slot updates never mutate a state in place: each edit builds a new
//! [`GuessState`] with one slot replaced, which the [`Round`] then swaps in.

use super::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a typed guess is compared with the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRule {
    /// Case-sensitive exact equality
    #[default]
    Exact,
    /// Equality after lowercasing both sides
    IgnoreCase,
}

impl MatchRule {
    /// Compare a guess with its target
    #[must_use]
    pub fn matches(self, guess: &str, target: &str) -> bool {
        match self {
            Self::Exact => guess == target,
            Self::IgnoreCase => guess.to_lowercase() == target.to_lowercase(),
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::IgnoreCase => f.write_str("ignore-case"),
        }
    }
}

impl FromStr for MatchRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "case-sensitive" => Ok(Self::Exact),
            "ignore-case" | "case-insensitive" | "insensitive" => Ok(Self::IgnoreCase),
            other => Err(format!("unknown match rule '{other}' (expected exact or ignore-case)")),
        }
    }
}

/// Error for a slot index past the end of the card
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("slot {index} out of range for a card with {len} words")]
pub struct GuessError {
    pub index: usize,
    pub len: usize,
}

/// One typed string per slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessState {
    slots: Vec<String>,
}

impl GuessState {
    /// Fresh state with `len` empty slots
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![String::new(); len],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// New state with slot `index` replaced by `value`
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn with_slot(&self, index: usize, value: impl Into<String>) -> Result<Self, GuessError> {
        if index >= self.slots.len() {
            return Err(GuessError {
                index,
                len: self.slots.len(),
            });
        }

        let mut slots = self.slots.clone();
        slots[index] = value.into();
        Ok(Self { slots })
    }
}

/// The card in play together with the player's guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    card: Card,
    guesses: GuessState,
    rule: MatchRule,
}

impl Round {
    /// Start a round with every slot empty
    #[must_use]
    pub fn new(card: Card, rule: MatchRule) -> Self {
        let guesses = GuessState::empty(card.len());
        Self {
            card,
            guesses,
            rule,
        }
    }

    #[must_use]
    pub const fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub const fn guesses(&self) -> &GuessState {
        &self.guesses
    }

    #[must_use]
    pub const fn rule(&self) -> MatchRule {
        self.rule
    }

    /// Replace the value of one slot, leaving the others as they were
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn set_slot(&mut self, index: usize, value: impl Into<String>) -> Result<(), GuessError> {
        self.guesses = self.guesses.with_slot(index, value)?;
        Ok(())
    }

    /// Append a typed character to a slot
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn push_char(&mut self, index: usize, c: char) -> Result<(), GuessError> {
        let mut value = self.slot_value(index)?.to_string();
        value.push(c);
        self.set_slot(index, value)
    }

    /// Remove the last character of a slot
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn pop_char(&mut self, index: usize) -> Result<(), GuessError> {
        let mut value = self.slot_value(index)?.to_string();
        value.pop();
        self.set_slot(index, value)
    }

    /// Fill a slot with its target word, exactly as stored
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if `index` is out of range.
    pub fn reveal(&mut self, index: usize) -> Result<(), GuessError> {
        let target = self
            .card
            .target(index)
            .ok_or(GuessError {
                index,
                len: self.card.len(),
            })?
            .to_string();
        self.set_slot(index, target)
    }

    /// Whether the slot's value equals its target under the round's rule
    ///
    /// Out-of-range slots are never correct.
    #[must_use]
    pub fn is_slot_correct(&self, index: usize) -> bool {
        match (self.guesses.get(index), self.card.target(index)) {
            (Some(guess), Some(target)) => self.rule.matches(guess, target),
            _ => false,
        }
    }

    /// Whether every slot is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        (0..self.card.len()).all(|i| self.is_slot_correct(i))
    }

    /// Number of correct slots
    #[must_use]
    pub fn correct_count(&self) -> usize {
        (0..self.card.len()).filter(|&i| self.is_slot_correct(i)).count()
    }

    fn slot_value(&self, index: usize) -> Result<&str, GuessError> {
        self.guesses.get(index).ok_or(GuessError {
            index,
            len: self.guesses.len(),
        })
    }
}

/// Which slots render as correct
///
/// In easy mode each slot lights up on its own as soon as it is right.
/// Otherwise nothing lights up until the whole card is solved, then every
/// slot does at once.
#[must_use]
pub fn highlights(round: &Round, easy_mode: bool) -> Vec<bool> {
    let len = round.card().len();
    if easy_mode {
        (0..len).map(|i| round.is_slot_correct(i)).collect()
    } else {
        vec![round.is_all_correct(); len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::WordEntry;

    fn card() -> Card {
        Card::new(
            None,
            'H',
            vec![
                WordEntry::new("harvest", "The gathering of ripe crops"),
                WordEntry::new("horizon", "Where earth and sky appear to meet"),
                WordEntry::new("Hesitate", "To pause before acting"),
            ],
        )
    }

    #[test]
    fn new_round_has_empty_slots() {
        let round = Round::new(card(), MatchRule::Exact);
        assert_eq!(round.guesses().len(), 3);
        assert!(round.guesses().iter().all(str::is_empty));
        assert!(!round.is_all_correct());
    }

    #[test]
    fn with_slot_leaves_original_untouched() {
        let before = GuessState::empty(3);
        let after = before.with_slot(1, "horizon").unwrap();

        assert_eq!(before.get(1), Some(""));
        assert_eq!(after.get(1), Some("horizon"));
        assert_eq!(after.get(0), Some(""));
        assert_eq!(after.get(2), Some(""));
    }

    #[test]
    fn with_slot_out_of_range() {
        let state = GuessState::empty(3);
        assert_eq!(
            state.with_slot(3, "x"),
            Err(GuessError { index: 3, len: 3 })
        );
    }

    #[test]
    fn exact_rule_is_case_sensitive() {
        let mut round = Round::new(card(), MatchRule::Exact);

        round.set_slot(0, "Harvest").unwrap();
        assert!(!round.is_slot_correct(0));

        round.set_slot(0, "harvest").unwrap();
        assert!(round.is_slot_correct(0));
    }

    #[test]
    fn ignore_case_rule() {
        let mut round = Round::new(card(), MatchRule::IgnoreCase);

        round.set_slot(0, "HARVEST").unwrap();
        round.set_slot(2, "hesitate").unwrap();
        assert!(round.is_slot_correct(0));
        assert!(round.is_slot_correct(2));
        assert!(!round.is_slot_correct(1));
    }

    #[test]
    fn set_slot_preserves_other_slots() {
        let mut round = Round::new(card(), MatchRule::Exact);
        round.set_slot(0, "harvest").unwrap();
        round.set_slot(1, "hor").unwrap();

        assert_eq!(round.guesses().get(0), Some("harvest"));
        assert_eq!(round.guesses().get(1), Some("hor"));
        assert!(round.is_slot_correct(0));
    }

    #[test]
    fn reveal_overrides_typed_value() {
        let mut round = Round::new(card(), MatchRule::Exact);
        round.set_slot(2, "hesitant").unwrap();

        round.reveal(2).unwrap();

        assert_eq!(round.guesses().get(2), Some("Hesitate"));
        assert!(round.is_slot_correct(2));
    }

    #[test]
    fn reveal_all_solves_card() {
        let mut round = Round::new(card(), MatchRule::Exact);
        for i in 0..3 {
            round.reveal(i).unwrap();
        }
        assert!(round.is_all_correct());
        assert_eq!(round.correct_count(), 3);
    }

    #[test]
    fn reveal_out_of_range() {
        let mut round = Round::new(card(), MatchRule::Exact);
        assert!(round.reveal(5).is_err());
        assert!(!round.is_slot_correct(5));
    }

    #[test]
    fn push_and_pop_chars() {
        let mut round = Round::new(card(), MatchRule::Exact);
        for c in "horizonx".chars() {
            round.push_char(1, c).unwrap();
        }
        assert!(!round.is_slot_correct(1));

        round.pop_char(1).unwrap();
        assert!(round.is_slot_correct(1));

        // Popping an empty slot is harmless
        round.pop_char(0).unwrap();
        assert_eq!(round.guesses().get(0), Some(""));
    }

    #[test]
    fn easy_mode_highlights_single_slot() {
        let mut round = Round::new(card(), MatchRule::Exact);
        round.set_slot(1, "horizon").unwrap();
        round.set_slot(2, "wrong").unwrap();

        assert_eq!(highlights(&round, true), vec![false, true, false]);
    }

    #[test]
    fn normal_mode_waits_for_all_correct() {
        let mut round = Round::new(card(), MatchRule::Exact);
        round.set_slot(0, "harvest").unwrap();
        round.set_slot(1, "horizon").unwrap();
        assert_eq!(highlights(&round, false), vec![false, false, false]);

        round.set_slot(2, "Hesitate").unwrap();
        assert_eq!(highlights(&round, false), vec![true, true, true]);
    }

    #[test]
    fn match_rule_parse() {
        assert_eq!("exact".parse::<MatchRule>(), Ok(MatchRule::Exact));
        assert_eq!("Ignore-Case".parse::<MatchRule>(), Ok(MatchRule::IgnoreCase));
        assert!("fuzzy".parse::<MatchRule>().is_err());
        assert_eq!(MatchRule::IgnoreCase.to_string(), "ignore-case");
    }
}
