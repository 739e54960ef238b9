//! NewsAPI client
//!
//! Keyword search against a NewsAPI-compatible `/v2/everything` endpoint.
//! An unconfigured API key or an empty keyword yields an empty result list
//! rather than an error; protocol and transport failures surface as
//! [`NewsError`] for the UI to report as a flash message.

pub mod summarize;

use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::NewsConfig;

/// Request timeout for NewsAPI and article fetches.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("news api error ({code}): {message}")]
    Api { code: String, message: String },
}

/// One article as returned by the news endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Wire format of the search response. Error responses carry `code` and
/// `message` instead of `articles`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the news endpoint. Cheap to clone via [`crate::api::AppState`]
/// wrapping it in an `Arc`.
#[derive(Debug)]
pub struct NewsClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn new(config: &NewsConfig) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid news endpoint: {}", config.endpoint))?;
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Search articles for a keyword, newest first.
    ///
    /// Returns an empty list without issuing a request when the keyword is
    /// empty or no API key is configured.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Article>, NewsError> {
        let keyword = keyword.trim();
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("news api key not configured, returning no articles");
            return Ok(Vec::new());
        };
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("q", keyword),
                ("sortBy", "publishedAt"),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        let body: SearchResponse = response.json().await?;
        if body.status != "ok" {
            let code = body.code.unwrap_or_else(|| "unknown".to_string());
            let message = body.message.unwrap_or_default();
            warn!(%code, %message, "news api rejected the search");
            return Err(NewsError::Api { code, message });
        }

        debug!(keyword, count = body.articles.len(), "news search complete");
        Ok(body.articles)
    }
}
