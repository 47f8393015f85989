use std::cell::RefCell;

use super::*;

/// In-memory [`ThemeStore`] standing in for `localStorage`.
struct MemoryStore(RefCell<Option<String>>);

impl MemoryStore {
    fn empty() -> Self {
        Self(RefCell::new(None))
    }

    fn with(value: &str) -> Self {
        Self(RefCell::new(Some(value.to_owned())))
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_owned());
    }
}

// =============================================================
// Theme values
// =============================================================

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// Initial load
// =============================================================

#[test]
fn fresh_load_defaults_to_light() {
    let store = MemoryStore::empty();
    assert_eq!(initial_theme(&store), Theme::Light);
}

#[test]
fn stored_dark_is_honoured() {
    let store = MemoryStore::with("dark");
    assert_eq!(initial_theme(&store), Theme::Dark);
}

#[test]
fn garbage_in_storage_falls_back_to_light() {
    let store = MemoryStore::with("midnight");
    assert_eq!(initial_theme(&store), Theme::Light);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_light_persists_dark() {
    let store = MemoryStore::empty();
    let next = toggle(Theme::Light, &store);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.get().as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_restores_light() {
    let store = MemoryStore::empty();
    let next = toggle(Theme::Light, &store);
    let back = toggle(next, &store);
    assert_eq!(back, Theme::Light);
    assert_eq!(store.get().as_deref(), Some("light"));
}
