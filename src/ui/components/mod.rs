//! Shared Dioxus components for server-rendered pages.

pub mod layout;
pub mod theme;

pub use layout::Layout;
pub use theme::ThemeToggle;
