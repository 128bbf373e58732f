//! Formatting utilities for terminal output

use crate::core::DifficultyLevel;

/// Display name for a card's level
#[must_use]
pub fn level_label(level: Option<DifficultyLevel>) -> &'static str {
    match level {
        Some(DifficultyLevel::Everyday) => "Everyday",
        Some(DifficultyLevel::Intermediate) => "Intermediate",
        Some(DifficultyLevel::Challenging) => "Challenging",
        None => "Any",
    }
}

/// Hint showing the first letter and the length of a word
///
/// `"harvest"` becomes `"h _ _ _ _ _ _"`.
#[must_use]
pub fn mask_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    std::iter::once(first.to_string())
        .chain(chars.map(|c| if c.is_whitespace() { " ".to_string() } else { "_".to_string() }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Marker shown next to a slot
#[must_use]
pub const fn slot_marker(highlighted: bool) -> &'static str {
    if highlighted { "✔" } else { "·" }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
