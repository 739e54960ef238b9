//! Mock article pages for summarizer tests.

use axum::{http::StatusCode, response::Html, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const STORY_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Probe reaches orbit</title>
    <style>p { margin: 0; }</style>
    <script>window.analytics = "<p>tracker</p>";</script>
</head>
<body>
    <nav><a href="/">home</a></nav>
    <p>The probe entered orbit around the moon on Tuesday after a seven month cruise.</p>
    <p>Mission engineers confirmed the orbit insertion burn lasted <b>twelve minutes</b>.</p>
    <p>The probe carries four instruments to map ice deposits near the lunar poles.</p>
    <p>A first batch of probe data is expected within two weeks, the agency said.</p>
</body>
</html>"#;

/// Serves a fake news site: a story with paragraphs, and a page without any.
pub struct MockArticleSite {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockArticleSite {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/story", get(|| async { Html(STORY_HTML) }))
            .route(
                "/empty",
                get(|| async { Html("<html><body><div>nothing here</div></body></html>") }),
            )
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, "gone") }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock article serve");
        });

        Self { addr, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for MockArticleSite {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
