//! Browser implementations of the theme seams.
//!
//! `localStorage` backs the preference store and `document.documentElement`
//! carries the marker attribute. All failures degrade silently: storage
//! disabled, missing document, missing control - the feature just does
//! nothing.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{
    Theme, ThemePreferenceStore, ThemeToggleController, UiRootHandle, CONTROL_ID,
    MARKER_ATTRIBUTE, STORAGE_KEY,
};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn document_root() -> Option<web_sys::Element> {
    document()?.document_element()
}

/// Preference store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageStore;

impl ThemePreferenceStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok()?
    }

    fn set(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

/// Root handle backed by `document.documentElement`.
#[derive(Clone, Copy, Debug)]
pub struct DocumentRoot;

impl UiRootHandle for DocumentRoot {
    fn marker(&self) -> Option<String> {
        document_root()?.get_attribute(MARKER_ATTRIBUTE)
    }

    fn set_marker(&self, value: &str) {
        if let Some(root) = document_root() {
            let _ = root.set_attribute(MARKER_ATTRIBUTE, value);
        }
    }

    fn clear_marker(&self) {
        if let Some(root) = document_root() {
            let _ = root.remove_attribute(MARKER_ATTRIBUTE);
        }
    }

    fn has_toggle_control(&self) -> bool {
        document()
            .and_then(|d| d.get_element_by_id(CONTROL_ID))
            .is_some()
    }
}

fn controller() -> ThemeToggleController<LocalStorageStore, DocumentRoot> {
    ThemeToggleController::new(LocalStorageStore, DocumentRoot)
}

/// Restore the saved theme and attach the click handler to `#theme-toggle`.
fn attach() {
    if !controller().initialize() {
        return;
    }
    let Some(control) = document().and_then(|d| d.get_element_by_id(CONTROL_ID)) else {
        return;
    };
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        controller().toggle();
    });
    let _ = control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    // Listener lives for the page lifetime
    handler.forget();
}

/// Wire up the theme toggle once the document is ready.
///
/// Call once from the wasm entry point. If the document is still parsing,
/// installation is deferred to `DOMContentLoaded`; otherwise it runs
/// immediately.
#[wasm_bindgen(js_name = installThemeToggle)]
pub fn install() {
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            attach();
        });
        let _ = doc
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        attach();
    }
}
