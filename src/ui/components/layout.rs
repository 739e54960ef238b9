//! Layout component wrapping pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::theme::{ThemeToggle, THEME_FUNCTIONS, THEME_SCRIPT};

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
small { color: var(--pico-muted-color); }
.flash { border-left: 4px solid var(--pico-del-color); padding: 0.5rem 1rem; }
.article-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
.article-grid article { margin: 0; display: flex; flex-direction: column; }
.article-grid img { width: 100%; max-height: 180px; object-fit: cover; border-radius: 4px; }
.article-grid footer { margin-top: auto; }
.summary { font-style: italic; }
.tags a { margin-right: 0.5rem; }
.theme-toggle { padding: 0.25rem 0.5rem; font-size: 1rem; margin: 0; width: auto; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Main layout component wrapping all pages.
///
/// The `<html>` shell is added by the handlers and carries no `data-theme`
/// attribute: light is the default and the head script sets the attribute
/// only when a dark preference was persisted.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - NewsBrief" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css"
            }
            style { {CUSTOM_STYLES} }
            script { dangerous_inner_html: THEME_SCRIPT }
        }
        body {
            main { class: "container",
                {props.children}
            }
            footer {
                class: "container",
                style: "display:flex;justify-content:space-between;align-items:center;",
                small { "NewsBrief v{version}" }
                ThemeToggle {}
            }
            script { dangerous_inner_html: THEME_FUNCTIONS }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}
