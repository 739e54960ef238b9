//! HTTP API handlers and router assembly.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Form, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::news::NewsClient;
use crate::ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsClient>,
    pub started: Instant,
}

impl AppState {
    pub fn new(news: NewsClient) -> Self {
        Self {
            news: Arc::new(news),
            started: Instant::now(),
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Web UI
        .route("/", get(ui::home_page).post(ui::search_submit))
        // Health check
        .route("/status", get(status_handler))
        // Article summary (AJAX from the home page)
        .route("/summarize-ajax", post(summarize_handler))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - service health
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        service: "newsbrief",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

/// Either `{"summary": ...}` or `{"error": ...}`, always HTTP 200. The page
/// script displays whichever field is present.
#[derive(Serialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    Summary { summary: String },
    Error { error: String },
}

/// POST /summarize-ajax - fetch and summarize one article
pub async fn summarize_handler(
    State(state): State<AppState>,
    Form(request): Form<SummarizeRequest>,
) -> impl IntoResponse {
    match state.news.summarize_article(&request.url).await {
        Ok(summary) => Json(SummarizeResponse::Summary { summary }),
        Err(e) => {
            warn!(url = %request.url, error = %e, "summarization failed");
            Json(SummarizeResponse::Error {
                error: e.to_string(),
            })
        }
    }
}
