//! Theme preference resolution and persistence.
//!
//! The flag is resolved once, in three tiers:
//!
//! 1. the value stored under [`THEME_KEY`], if present and non-empty
//! 2. the OS "prefers dark" signal, if available
//! 3. light
//!
//! Nothing here returns an error. A storage or signal failure is logged and
//! treated as "no preference".

use std::sync::Arc;

use crate::storage::KeyValueStore;
use crate::types::Theme;

/// Storage key holding `"true"` (dark) or `"false"` (light).
pub const THEME_KEY: &str = "darkMode";

/// Read-only OS color-scheme signal.
pub trait ColorSchemeSignal {
    /// `Some(true)` if the user prefers a dark appearance, `None` if the
    /// signal cannot be read.
    fn prefers_dark(&self) -> Option<bool>;
}

/// A signal value captured ahead of time.
impl ColorSchemeSignal for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// Environments with no color-scheme signal at all (the CLI).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColorScheme;

impl ColorSchemeSignal for NoColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// The resolved theme flag plus the store it is persisted to.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    dark: bool,
}

impl PreferenceStore {
    /// Resolve the initial flag: stored value, else OS signal, else light.
    pub fn resolve_initial(store: Arc<dyn KeyValueStore>, signal: &dyn ColorSchemeSignal) -> Self {
        let dark = match read_stored(store.as_ref()) {
            Some(dark) => {
                tracing::debug!(dark, "Theme resolved from storage");
                dark
            }
            None => match signal.prefers_dark() {
                Some(dark) => {
                    tracing::debug!(dark, "Theme resolved from OS color scheme");
                    dark
                }
                None => {
                    tracing::debug!("No theme preference available, defaulting to light");
                    false
                }
            },
        };

        Self { store, dark }
    }

    /// The persisted value alone, without consulting any fallback.
    pub fn stored(store: &dyn KeyValueStore) -> Option<bool> {
        read_stored(store)
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark)
    }

    /// Update the flag and persist it immediately.
    ///
    /// In-memory state changes even if the write fails.
    pub fn set(&mut self, dark: bool) {
        self.dark = dark;
        let value = if dark { "true" } else { "false" };
        if let Err(e) = self.store.set(THEME_KEY, value) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }

    /// Flip the flag; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.dark);
        self.dark
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

fn read_stored(store: &dyn KeyValueStore) -> Option<bool> {
    match store.get(THEME_KEY) {
        // An empty string counts as "not set".
        Ok(Some(value)) if !value.is_empty() => Some(value == "true"),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Failed to read theme preference: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkTreeError;
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, LinkTreeError> {
            Err(LinkTreeError::Storage("unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), LinkTreeError> {
            Err(LinkTreeError::Storage("unavailable".to_string()))
        }
    }

    fn memory() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_stored_value_wins_over_signal() {
        let store = memory();
        store.set(THEME_KEY, "false").unwrap();
        let prefs = PreferenceStore::resolve_initial(store, &Some(true));
        assert!(!prefs.is_dark());
    }

    #[test]
    fn test_signal_used_when_nothing_stored() {
        assert!(PreferenceStore::resolve_initial(memory(), &Some(true)).is_dark());
        assert!(!PreferenceStore::resolve_initial(memory(), &Some(false)).is_dark());
        assert!(!PreferenceStore::resolve_initial(memory(), &NoColorScheme).is_dark());
    }

    #[test]
    fn test_empty_stored_value_falls_through() {
        let store = memory();
        store.set(THEME_KEY, "").unwrap();
        assert!(PreferenceStore::resolve_initial(store, &Some(true)).is_dark());
    }

    #[test]
    fn test_unrecognized_stored_value_is_light() {
        let store = memory();
        store.set(THEME_KEY, "yes").unwrap();
        assert!(!PreferenceStore::resolve_initial(store, &Some(true)).is_dark());
    }

    #[test]
    fn test_broken_store_falls_back_silently() {
        let mut prefs = PreferenceStore::resolve_initial(Arc::new(BrokenStore), &NoColorScheme);
        assert!(!prefs.is_dark());

        prefs.set(true);
        assert!(prefs.is_dark());
    }

    #[test]
    fn test_broken_store_still_consults_signal() {
        let prefs = PreferenceStore::resolve_initial(Arc::new(BrokenStore), &Some(true));
        assert!(prefs.is_dark());
    }

    #[test]
    fn test_set_writes_string_form() {
        let store = memory();
        let mut prefs = PreferenceStore::resolve_initial(store.clone(), &NoColorScheme);
        prefs.set(true);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("true"));
        prefs.set(false);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        for initial in [false, true] {
            let store = memory();
            let mut prefs = PreferenceStore::resolve_initial(store.clone(), &NoColorScheme);
            prefs.set(initial);

            assert_eq!(prefs.toggle(), !initial);
            assert_eq!(prefs.toggle(), initial);
            assert_eq!(prefs.is_dark(), initial);
            assert_eq!(
                PreferenceStore::stored(&*store),
                Some(initial),
                "persisted value must return to the original"
            );
        }
    }

    #[test]
    fn test_stored_ignores_signal() {
        let store = memory();
        assert_eq!(PreferenceStore::stored(&*store), None);
        store.set(THEME_KEY, "true").unwrap();
        assert_eq!(PreferenceStore::stored(&*store), Some(true));
    }

    #[test]
    fn test_theme_follows_flag() {
        let mut prefs = PreferenceStore::resolve_initial(memory(), &NoColorScheme);
        assert_eq!(prefs.theme(), Theme::Light);
        prefs.toggle();
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.theme().root_class(), "dark");
    }
}
