//! Settings command
//!
//! Shows or changes the persisted easy-mode flag outside of a game.

use crate::settings::{KeyValueStore, Settings, StoreError};

/// Outcome of the settings command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsReport {
    pub easy_mode: bool,
    /// Whether this invocation changed the stored value
    pub changed: bool,
    /// Where the settings live, if on disk
    pub location: Option<String>,
}

/// Apply an optional easy-mode change and report the resulting state
///
/// # Errors
///
/// Returns `StoreError` if the new value cannot be saved.
pub fn apply_settings<S: KeyValueStore>(
    settings: &mut Settings<S>,
    easy_mode: Option<bool>,
    location: Option<String>,
) -> Result<SettingsReport, StoreError> {
    let before = settings.easy_mode();

    if let Some(enabled) = easy_mode {
        settings.set_easy_mode(enabled)?;
    }

    Ok(SettingsReport {
        easy_mode: settings.easy_mode(),
        changed: settings.easy_mode() != before,
        location,
    })
}

/// Parse an on/off switch value
///
/// # Errors
///
/// Returns a message naming the accepted spellings.
pub fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(format!("expected on or off, got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn show_without_change() {
        let mut settings = Settings::new(MemoryStore::new());
        let report = apply_settings(&mut settings, None, None).unwrap();

        assert!(!report.easy_mode);
        assert!(!report.changed);
    }

    #[test]
    fn turn_on_then_off() {
        let mut settings = Settings::new(MemoryStore::new());

        let report = apply_settings(&mut settings, Some(true), None).unwrap();
        assert!(report.easy_mode);
        assert!(report.changed);

        let report = apply_settings(&mut settings, Some(true), None).unwrap();
        assert!(!report.changed);

        let report = apply_settings(&mut settings, Some(false), Some("here".into())).unwrap();
        assert!(!report.easy_mode);
        assert!(report.changed);
        assert_eq!(report.location.as_deref(), Some("here"));
    }

    #[test]
    fn switch_spellings() {
        assert_eq!(parse_switch("ON"), Ok(true));
        assert_eq!(parse_switch("no"), Ok(false));
        assert!(parse_switch("maybe").is_err());
    }
}
