//! Theme toggle button for server-rendered pages.
//!
//! The SSR pages ship the toggle as inline JavaScript; wasm clients get the
//! same behavior from [`crate::theme::web`]. Both read and write the same
//! storage key and marker attribute, so the two paths stay interchangeable.

use dioxus::prelude::*;

/// Toggle button. The inline script attaches the click handler by this id.
#[component]
pub fn ThemeToggle() -> Element {
    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            title: "Toggle theme",
            "\u{1F313}"
        }
    }
}

/// Restores the persisted theme before first paint (included in head).
/// Only a stored "dark" sets the attribute; anything else stays light.
pub const THEME_SCRIPT: &str = r#"
(function(){
    if (localStorage.getItem('theme') === 'dark') {
        document.documentElement.setAttribute('data-theme', 'dark');
    }
})();
"#;

/// Toggle behavior (included at the end of body, after the control exists).
pub const THEME_FUNCTIONS: &str = r#"
(function(){
    const themeToggle = document.getElementById('theme-toggle');
    if (!themeToggle) return;
    themeToggle.addEventListener('click', function () {
        if (document.documentElement.getAttribute('data-theme') === 'dark') {
            document.documentElement.removeAttribute('data-theme');
            localStorage.setItem('theme', 'light');
        } else {
            document.documentElement.setAttribute('data-theme', 'dark');
            localStorage.setItem('theme', 'dark');
        }
    });
})();
"#;
