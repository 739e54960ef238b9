//! Web UI handlers - the server-rendered news page.
//!
//! Pages are Dioxus components rendered to HTML strings and wrapped in a
//! bare `<html>` shell. The shell never pre-sets the theme marker attribute:
//! light is the default and the persisted preference is restored client-side
//! before first paint.
//!
//! Using Pico CSS (classless CSS framework) for clean, mobile-friendly
//! design without custom CSS maintenance burden.

pub mod components;
pub mod pages;

use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse},
};
use chrono::Local;
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::api::AppState;
use pages::HomePage;

/// Query params for the home page (popular tag links use `?q=`)
#[derive(Deserialize)]
pub struct HomeQuery {
    pub q: Option<String>,
}

/// Search form body
#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub keyword: String,
}

/// Wrap rendered body markup in the document shell. No `data-theme` here;
/// the head script applies a persisted dark preference.
fn page_shell(body: String) -> Html<String> {
    Html(format!("<!DOCTYPE html>\n<html lang=\"en\">\n{body}</html>"))
}

/// GET / - home page, optionally searching via the `q` query param
pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let keyword = query.q.unwrap_or_default();
    render_home(&state, keyword, None).await
}

/// POST / - search form submission
pub async fn search_submit(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    let keyword = form.keyword.trim().to_string();
    if keyword.is_empty() {
        return render_home(&state, String::new(), Some("Please enter a keyword.".to_string()))
            .await;
    }
    render_home(&state, keyword, None).await
}

async fn render_home(state: &AppState, keyword: String, flash: Option<String>) -> Html<String> {
    let mut flash = flash;
    let articles = if keyword.is_empty() {
        Vec::new()
    } else {
        match state.news.search(&keyword).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(%keyword, error = %e, "news search failed");
                flash = Some("News search is unavailable right now.".to_string());
                Vec::new()
            }
        }
    };

    let current_date = Local::now().format("%A, %B %d, %Y").to_string();
    let body = dioxus::ssr::render_element(rsx! {
        HomePage {
            keyword,
            flash,
            current_date,
            articles,
        }
    });
    page_shell(body)
}
