//! Light/dark theme: the persisted preference and the toggle.
//!
//! Reads the preference from `localStorage` at page load and mirrors it
//! onto the document root's `data-theme` attribute. The toggle treats
//! the live attribute as source of truth and writes both the attribute
//! and the store. No cross-tab sync, no system-preference detection.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root mirroring the active theme.
pub const ROOT_ATTR: &str = "data-theme";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored and written to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Unrecognised values are `None`
    /// so callers fall back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The single transition of the theme state machine.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persisted preference storage with a defined default.
///
/// Injected so the toggle logic stays independent of `localStorage` and
/// can run against an in-memory store in tests.
pub trait ThemeStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
}

/// Theme to apply at page load: the stored preference, or light when
/// nothing usable is stored.
pub fn initial_theme(store: &dyn ThemeStore) -> Theme {
    store
        .get()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Compute and persist the next theme. `current` comes from the live
/// document attribute, which is the source of truth at toggle time.
pub fn toggle(current: Theme, store: &dyn ThemeStore) -> Theme {
    let next = current.toggled();
    store.set(next.as_str());
    next
}

/// `localStorage`-backed [`ThemeStore`].
#[cfg(feature = "browser")]
pub struct LocalStorage;

#[cfg(feature = "browser")]
impl ThemeStore for LocalStorage {
    fn get(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }

    fn set(&self, value: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
}

/// Apply a theme to the document root's `data-theme` attribute.
#[cfg(feature = "browser")]
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute(ROOT_ATTR, theme.as_str());
    }
}

/// Theme currently applied to the document root. An absent or
/// unrecognised attribute reads as light.
#[cfg(feature = "browser")]
pub fn applied() -> Theme {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute(ROOT_ATTR))
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}
