//! NewsBrief - keyword news search with on-demand article summaries.
//!
//! This library provides:
//! - NewsAPI keyword search
//! - Extractive article summarization (no model downloads)
//! - Server-rendered web UI (Pico CSS)
//! - Persisted light/dark theme toggle

pub mod theme;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod news;
#[cfg(feature = "server")]
pub mod ui;
