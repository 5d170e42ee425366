//! Light/dark theme preference: a two-state machine with no terminal state.
//!
//! Exactly two reachable values. The toggle direction is decided from the
//! *applied* presentation state rather than the persisted value, so if the
//! two ever diverge (say a persisted write failed earlier) the page follows
//! what the user can see.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::store::{PersistentStore, StorageBackend};

/// Storage key for the theme string (`"light"` / `"dark"`).
pub const THEME_STORAGE_KEY: &str = "goalpost_theme";

/// The page theme. Dark is the compiled-in default for absent or
/// unrecognizable persisted values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme: `light -> dark`, `dark -> light`.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decode a persisted value. Anything but `"light"` resolves to the
    /// default rather than erroring.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        match raw {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Owns the persisted theme preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemePreference<B> {
    store: PersistentStore<B>,
}

impl<B: StorageBackend> ThemePreference<B> {
    pub fn new(backend: B) -> Self {
        Self { store: PersistentStore::new(backend) }
    }

    /// Resolve the persisted theme, defaulting to dark when nothing is
    /// stored or the store is unreadable.
    pub fn load(&self) -> Theme {
        self.store
            .read(THEME_STORAGE_KEY)
            .map(|raw| Theme::from_persisted(&raw))
            .unwrap_or_default()
    }

    /// Compute the next theme from the currently applied one and persist
    /// it. A failed write is logged by the store and does not stop the
    /// switch; the caller applies the returned theme regardless.
    pub fn toggle_from(&self, applied: Theme) -> Theme {
        let next = applied.complement();
        let _ = self.store.write(THEME_STORAGE_KEY, next.as_str());
        next
    }
}
