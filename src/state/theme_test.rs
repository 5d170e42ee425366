use super::*;
use crate::store::{MemoryBackend, StorageBackend, StorageError};

struct BrokenBackend;

impl StorageBackend for BrokenBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Theme value semantics
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn complement_is_a_two_cycle() {
    assert_eq!(Theme::Light.complement(), Theme::Dark);
    assert_eq!(Theme::Dark.complement(), Theme::Light);
    assert_eq!(Theme::Light.complement().complement(), Theme::Light);
    assert_eq!(Theme::Dark.complement().complement(), Theme::Dark);
}

#[test]
fn persisted_strings_round_trip() {
    assert_eq!(Theme::from_persisted(Theme::Light.as_str()), Theme::Light);
    assert_eq!(Theme::from_persisted(Theme::Dark.as_str()), Theme::Dark);
}

#[test]
fn unrecognized_persisted_value_falls_back_to_dark() {
    assert_eq!(Theme::from_persisted("solarized"), Theme::Dark);
    assert_eq!(Theme::from_persisted(""), Theme::Dark);
    assert_eq!(Theme::from_persisted("LIGHT"), Theme::Dark);
}

// =============================================================
// ThemePreference load
// =============================================================

#[test]
fn load_defaults_to_dark_when_nothing_is_stored() {
    let prefs = ThemePreference::new(MemoryBackend::new());
    assert_eq!(prefs.load(), Theme::Dark);
}

#[test]
fn load_defaults_to_dark_when_store_is_unreadable() {
    let prefs = ThemePreference::new(BrokenBackend);
    assert_eq!(prefs.load(), Theme::Dark);
}

#[test]
fn load_reads_back_a_persisted_light_theme() {
    let backend = MemoryBackend::new();
    backend.seed(THEME_STORAGE_KEY, "light");
    let prefs = ThemePreference::new(&backend);
    assert_eq!(prefs.load(), Theme::Light);
}

// =============================================================
// ThemePreference toggle
// =============================================================

#[test]
fn toggle_persists_the_value_it_returns() {
    let backend = MemoryBackend::new();
    let prefs = ThemePreference::new(&backend);

    let next = prefs.toggle_from(Theme::Dark);
    assert_eq!(next, Theme::Light);
    assert_eq!(
        backend.get(THEME_STORAGE_KEY),
        Ok(Some("light".to_owned()))
    );

    let next = prefs.toggle_from(next);
    assert_eq!(next, Theme::Dark);
    assert_eq!(
        backend.get(THEME_STORAGE_KEY),
        Ok(Some("dark".to_owned()))
    );
}

#[test]
fn double_toggle_returns_to_the_original_theme() {
    let prefs = ThemePreference::new(MemoryBackend::new());
    for start in [Theme::Light, Theme::Dark] {
        assert_eq!(prefs.toggle_from(prefs.toggle_from(start)), start);
    }
}

#[test]
fn toggle_direction_follows_the_applied_state_not_storage() {
    let backend = MemoryBackend::new();
    backend.seed(THEME_STORAGE_KEY, "light");
    let prefs = ThemePreference::new(&backend);

    // Storage says light, but the page shows dark: the toggle goes to
    // light, because the applied state wins.
    assert_eq!(prefs.toggle_from(Theme::Dark), Theme::Light);
}

#[test]
fn toggle_still_switches_when_the_write_fails() {
    let prefs = ThemePreference::new(BrokenBackend);
    assert_eq!(prefs.toggle_from(Theme::Dark), Theme::Light);
    assert_eq!(prefs.toggle_from(Theme::Light), Theme::Dark);
}
