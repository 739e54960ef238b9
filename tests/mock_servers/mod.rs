//! Mock servers for integration testing
//!
//! Simulate the NewsAPI backend and article pages so the client and the
//! summarizer can be tested end-to-end without network access.

pub mod articles;
pub mod newsapi;

pub use articles::MockArticleSite;
pub use newsapi::MockNewsApi;
