//! Light/dark theme preference with persistence.
//!
//! The theme is a two-state toggle: dark is signalled by a `data-theme="dark"`
//! marker attribute on the document root, light by the attribute's absence.
//! The last choice is persisted under a fixed storage key and restored on the
//! next page load.
//!
//! The controller is generic over two injected seams so the behavior can be
//! exercised without a browser:
//! - [`ThemePreferenceStore`] - durable key-value storage for the preference
//! - [`UiRootHandle`] - the document root carrying the marker attribute
//!
//! On wasm targets the [`web`] module provides `localStorage` and
//! `document.documentElement` implementations of both seams.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Storage key for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Marker attribute on the document root. Present with value `dark` means
/// dark theme; absent means light.
pub const MARKER_ATTRIBUTE: &str = "data-theme";

/// Element id of the toggle control.
pub const CONTROL_ID: &str = "theme-toggle";

/// Theme options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` means "no
    /// preference" and yields the light default.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Durable key-value storage for the theme preference.
///
/// Writes are fire-and-forget: a backend that cannot persist (storage
/// disabled, quota exceeded) drops the write silently.
pub trait ThemePreferenceStore {
    /// Raw stored value, if any.
    fn get(&self) -> Option<String>;
    /// Persist the preference, overwriting any previous value.
    fn set(&self, theme: Theme);
}

/// Handle to the page root carrying the marker attribute, plus visibility of
/// the toggle control.
pub trait UiRootHandle {
    /// Current value of the marker attribute, if set.
    fn marker(&self) -> Option<String>;
    /// Set the marker attribute.
    fn set_marker(&self, value: &str);
    /// Remove the marker attribute.
    fn clear_marker(&self);
    /// Whether the toggle control exists on the page.
    fn has_toggle_control(&self) -> bool;
}

impl<T: ThemePreferenceStore + ?Sized> ThemePreferenceStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }
    fn set(&self, theme: Theme) {
        (**self).set(theme)
    }
}

impl<T: UiRootHandle + ?Sized> UiRootHandle for &T {
    fn marker(&self) -> Option<String> {
        (**self).marker()
    }
    fn set_marker(&self, value: &str) {
        (**self).set_marker(value)
    }
    fn clear_marker(&self) {
        (**self).clear_marker()
    }
    fn has_toggle_control(&self) -> bool {
        (**self).has_toggle_control()
    }
}

/// Restores the persisted theme on load and flips it on each activation of
/// the toggle control.
#[derive(Debug)]
pub struct ThemeToggleController<S, R> {
    store: S,
    root: R,
}

impl<S: ThemePreferenceStore, R: UiRootHandle> ThemeToggleController<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self { store, root }
    }

    /// Page-load restoration. Returns `true` when the toggle control was
    /// found and the caller should attach [`toggle`](Self::toggle) as its
    /// activation handler.
    ///
    /// When the control is missing the whole feature is inert: no restore,
    /// no listener, no error. A stored `"dark"` sets the marker; any other
    /// stored value (including none) leaves it unset. Never writes storage.
    pub fn initialize(&self) -> bool {
        if !self.root.has_toggle_control() {
            tracing::debug!("toggle control #{CONTROL_ID} not on page, theme toggle inert");
            return false;
        }
        if let Some(saved) = self.store.get() {
            if Theme::parse(&saved) == Theme::Dark {
                self.root.set_marker(Theme::Dark.as_str());
            }
        }
        true
    }

    /// One activation: flip the marker and persist the new state. Returns
    /// the theme now active. Marker and stored value agree afterwards.
    pub fn toggle(&self) -> Theme {
        if self.current() == Theme::Dark {
            self.root.clear_marker();
            self.store.set(Theme::Light);
            Theme::Light
        } else {
            self.root.set_marker(Theme::Dark.as_str());
            self.store.set(Theme::Dark);
            Theme::Dark
        }
    }

    /// Theme currently reflected by the marker attribute.
    pub fn current(&self) -> Theme {
        match self.root.marker() {
            Some(value) if value == Theme::Dark.as_str() => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory preference store.
    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn with_value(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
            }
        }
    }

    impl ThemePreferenceStore for MemoryStore {
        fn get(&self) -> Option<String> {
            self.value.borrow().clone()
        }
        fn set(&self, theme: Theme) {
            *self.value.borrow_mut() = Some(theme.as_str().to_string());
        }
    }

    /// Fake page root: marker attribute plus control presence.
    struct FakeRoot {
        marker: RefCell<Option<String>>,
        control_present: bool,
    }

    impl FakeRoot {
        fn new() -> Self {
            Self {
                marker: RefCell::new(None),
                control_present: true,
            }
        }

        fn without_control() -> Self {
            Self {
                marker: RefCell::new(None),
                control_present: false,
            }
        }
    }

    impl UiRootHandle for FakeRoot {
        fn marker(&self) -> Option<String> {
            self.marker.borrow().clone()
        }
        fn set_marker(&self, value: &str) {
            *self.marker.borrow_mut() = Some(value.to_string());
        }
        fn clear_marker(&self) {
            *self.marker.borrow_mut() = None;
        }
        fn has_toggle_control(&self) -> bool {
            self.control_present
        }
    }

    #[test]
    fn parse_treats_unknown_values_as_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("DARK"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn initialize_restores_saved_dark_idempotently() {
        let store = MemoryStore::with_value("dark");
        let root = FakeRoot::new();
        let controller = ThemeToggleController::new(&store, &root);

        assert!(controller.initialize());
        assert_eq!(root.marker().as_deref(), Some("dark"));

        // Running restore again must not change anything
        assert!(controller.initialize());
        assert_eq!(root.marker().as_deref(), Some("dark"));
        // No storage write during initialization
        assert_eq!(store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn initialize_defaults_to_light_without_preference() {
        let store = MemoryStore::default();
        let root = FakeRoot::new();
        assert!(ThemeToggleController::new(&store, &root).initialize());
        assert_eq!(root.marker(), None);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn initialize_defaults_to_light_for_malformed_value() {
        for bad in ["light", "blue", "Dark", "1"] {
            let store = MemoryStore::with_value(bad);
            let root = FakeRoot::new();
            assert!(ThemeToggleController::new(&store, &root).initialize());
            assert_eq!(root.marker(), None, "stored {bad:?} must yield light");
        }
    }

    #[test]
    fn toggle_inverts_marker_and_persists() {
        let store = MemoryStore::default();
        let root = FakeRoot::new();
        let controller = ThemeToggleController::new(&store, &root);
        controller.initialize();

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(root.marker().as_deref(), Some("dark"));
        assert_eq!(store.get().as_deref(), Some("dark"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(root.marker(), None);
        assert_eq!(store.get().as_deref(), Some("light"));
    }

    #[test]
    fn missing_control_is_inert() {
        // Even a stored dark preference must not be applied when the page
        // has no toggle control.
        let store = MemoryStore::with_value("dark");
        let root = FakeRoot::without_control();
        let controller = ThemeToggleController::new(&store, &root);

        assert!(!controller.initialize());
        assert_eq!(root.marker(), None);
        assert_eq!(store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn current_tracks_marker() {
        let store = MemoryStore::default();
        let root = FakeRoot::new();
        let controller = ThemeToggleController::new(&store, &root);
        assert_eq!(controller.current(), Theme::Light);
        root.set_marker("dark");
        assert_eq!(controller.current(), Theme::Dark);
        root.set_marker("sepia");
        assert_eq!(controller.current(), Theme::Light);
    }
}
