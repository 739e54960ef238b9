//! Mock NewsAPI server
//!
//! Simulates the `/v2/everything` endpoint including the error envelope
//! (`{"status": "error", "code": ..., "message": ...}`).

use axum::{extract::Query, extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const VALID_KEY: &str = "test-api-key";

#[derive(Default)]
struct MockNewsState {
    articles: Vec<Value>,
    /// When set, every request fails with this (code, message)
    error: Option<(String, String)>,
    /// Keywords seen in `q` params, for assertions
    queries: Vec<String>,
}

/// Mock NewsAPI server on a random port.
pub struct MockNewsApi {
    addr: SocketAddr,
    state: Arc<RwLock<MockNewsState>>,
    handle: JoinHandle<()>,
}

impl MockNewsApi {
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockNewsState::default()));

        let app = Router::new()
            .route("/v2/everything", get(everything_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock newsapi serve");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Endpoint URL to hand to `NewsConfig`.
    pub fn endpoint(&self) -> String {
        format!("http://{}/v2/everything", self.addr)
    }

    pub async fn set_articles(&self, articles: Vec<Value>) {
        self.state.write().await.articles = articles;
    }

    pub async fn fail_with(&self, code: &str, message: &str) {
        self.state.write().await.error = Some((code.to_string(), message.to_string()));
    }

    pub async fn seen_queries(&self) -> Vec<String> {
        self.state.read().await.queries.clone()
    }
}

impl Drop for MockNewsApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn everything_handler(
    State(state): State<Arc<RwLock<MockNewsState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut state = state.write().await;

    if let Some(q) = params.get("q") {
        state.queries.push(q.clone());
    }

    if let Some((code, message)) = &state.error {
        return Json(json!({
            "status": "error",
            "code": code,
            "message": message,
        }));
    }

    if params.get("apiKey").map(String::as_str) != Some(VALID_KEY) {
        return Json(json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect.",
        }));
    }

    Json(json!({
        "status": "ok",
        "totalResults": state.articles.len(),
        "articles": state.articles,
    }))
}
