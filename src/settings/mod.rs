//! Persisted player settings
//!
//! The only setting is easy mode. It is read from the injected store once at
//! construction, held in memory, and written back whenever it changes.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Storage key of the easy-mode flag
pub const EASY_MODE_KEY: &str = "word-sweep.easy-mode";

/// Stored value meaning "on"; absence or an empty string means "off"
const ENABLED: &str = "true";

/// Read the easy-mode flag straight from a store
///
/// Any non-empty value counts as on; a missing key reads as off.
#[must_use]
pub fn read_easy_mode<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store.get(EASY_MODE_KEY).is_some_and(|value| !value.is_empty())
}

/// Player settings over a key-value store
#[derive(Debug)]
pub struct Settings<S: KeyValueStore> {
    store: S,
    easy_mode: bool,
}

impl<S: KeyValueStore> Settings<S> {
    /// Load settings from `store`
    pub fn new(store: S) -> Self {
        let easy_mode = read_easy_mode(&store);
        tracing::debug!(easy_mode, "loaded settings");
        Self { store, easy_mode }
    }

    #[must_use]
    pub const fn easy_mode(&self) -> bool {
        self.easy_mode
    }

    /// Change easy mode and persist it
    ///
    /// The in-memory value changes even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot save the value.
    pub fn set_easy_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.easy_mode = enabled;
        let value = if enabled { ENABLED } else { "" };
        self.store.set(EASY_MODE_KEY, value)
    }

    /// Flip easy mode, returning the new value alongside the save result
    pub fn toggle_easy_mode(&mut self) -> (bool, Result<(), StoreError>) {
        let enabled = !self.easy_mode;
        (enabled, self.set_easy_mode(enabled))
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
