//! Active difficulty filter
//!
//! Tracks which levels the selector may draw from. The set is never empty:
//! toggling the last remaining level off is refused.

use super::card::{DifficultyLevel, UnknownLevel};
use std::fmt;
use std::str::FromStr;

/// Non-empty set of difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDifficulties {
    active: [bool; 3],
}

impl ActiveDifficulties {
    /// Every level active (the start-up state)
    #[must_use]
    pub const fn all() -> Self {
        Self {
            active: [true; 3],
        }
    }

    /// A set holding a single level
    #[must_use]
    pub const fn only(level: DifficultyLevel) -> Self {
        let mut active = [false; 3];
        active[level.index()] = true;
        Self { active }
    }

    /// Build a set from levels, returning `None` if no level is given
    pub fn from_levels<I>(levels: I) -> Option<Self>
    where
        I: IntoIterator<Item = DifficultyLevel>,
    {
        let mut active = [false; 3];
        for level in levels {
            active[level.index()] = true;
        }
        active.contains(&true).then_some(Self { active })
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, level: DifficultyLevel) -> bool {
        self.active[level.index()]
    }

    /// Number of active levels (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.iter().filter(|&&on| on).count()
    }

    /// Always `false`; provided for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active levels in display order
    pub fn iter(&self) -> impl Iterator<Item = DifficultyLevel> + '_ {
        DifficultyLevel::ALL
            .into_iter()
            .filter(|&level| self.contains(level))
    }

    /// Whether toggling `level` would change the set
    ///
    /// The only active level cannot be switched off, so the UI disables its control.
    #[must_use]
    pub fn can_toggle(&self, level: DifficultyLevel) -> bool {
        !(self.contains(level) && self.len() == 1)
    }

    /// Flip membership of `level`
    ///
    /// Returns `false` (and leaves the set untouched) when `level` is the only
    /// active one. Never reselects a card.
    pub fn toggle(&mut self, level: DifficultyLevel) -> bool {
        if !self.can_toggle(level) {
            tracing::debug!(%level, "refusing to deactivate the last active level");
            return false;
        }
        self.active[level.index()] = !self.active[level.index()];
        tracing::debug!(%level, active = %self, "toggled difficulty");
        true
    }
}

impl Default for ActiveDifficulties {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for ActiveDifficulties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(DifficultyLevel::name).collect();
        f.write_str(&names.join(","))
    }
}

/// Errors parsing a difficulty list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DifficultiesError {
    #[error(transparent)]
    Unknown(#[from] UnknownLevel),

    #[error("at least one difficulty level must be active")]
    Empty,
}

impl FromStr for ActiveDifficulties {
    type Err = DifficultiesError;

    /// Parse a comma-separated list such as `everyday,challenging`, or `all`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }

        let levels = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<DifficultyLevel>)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_levels(levels).ok_or(DifficultiesError::Empty)
    }
}
