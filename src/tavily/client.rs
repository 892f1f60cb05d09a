use std::env;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::types::{ApiErrorBody, SearchRequest, SearchResponse};

const API_BASE: &str = "https://api.tavily.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Fixed search options; asteroid always asks for recent news with an
// answer, images, and image descriptions included.
const SEARCH_DEPTH: &str = "basic";
const TOPIC: &str = "news";
const TIME_RANGE: &str = "year";
const MAX_RESULTS: u8 = 20;

#[derive(Debug, thiserror::Error)]
pub enum TavilyError {
    #[error("TAVILY_SEARCH_API not set. Get a key at https://app.tavily.com")]
    ApiKeyNotSet,

    #[error("API rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("API key rejected: {0}")]
    Unauthorized(String),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction for the search provider call.
/// Implemented by `TavilyClient` for production; mock implementations used in tests.
pub trait SearchClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, TavilyError>;
}

#[derive(Clone)]
struct ApiKey(String);

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Clone)]
pub struct TavilyClient {
    http: Client,
    api_key: ApiKey,
    base_url: String,
}

impl TavilyClient {
    pub fn from_env(http: Client) -> Result<Self, TavilyError> {
        let api_key = env::var("TAVILY_SEARCH_API").map_err(|_| TavilyError::ApiKeyNotSet)?;
        if api_key.trim().is_empty() {
            return Err(TavilyError::ApiKeyNotSet);
        }
        Ok(Self {
            http,
            api_key: ApiKey(api_key.trim().to_string()),
            base_url: API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: ApiKey("test-key".to_string()),
            base_url: base_url.to_string(),
        }
    }
}

impl SearchClient for TavilyClient {
    /// One provider round-trip. Failures surface directly: no retry,
    /// no backoff, no caching.
    async fn search(&self, query: &str) -> Result<SearchResponse, TavilyError> {
        let url = format!("{}/search", self.base_url);

        let request = SearchRequest {
            api_key: &self.api_key.0,
            query,
            search_depth: SEARCH_DEPTH,
            topic: TOPIC,
            time_range: TIME_RANGE,
            max_results: MAX_RESULTS,
            include_images: true,
            include_answer: true,
            include_image_descriptions: true,
        };

        debug_assert!(
            url.starts_with("https://") || cfg!(test),
            "API key must only be sent over HTTPS"
        );

        let response = self
            .http
            .post(&url)
            .header("User-Agent", crate::USER_AGENT)
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let classified = classify_failure(status.as_u16(), &text);
            warn!(error = %classified, "Tavily API error");
            return Err(classified);
        }

        let body: SearchResponse = response.json().await?;
        debug!(results = body.results.len(), "tavily search complete");
        Ok(body)
    }
}

fn classify_failure(code: u16, body: &str) -> TavilyError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.error)
        .unwrap_or_else(|| {
            // Truncate on a char boundary; the body may be non-ASCII.
            let snippet = body
                .char_indices()
                .nth(200)
                .map_or(body, |(i, _)| &body[..i]);
            format!("HTTP {code}: {snippet}")
        });

    match code {
        429 => TavilyError::RateLimited,
        401 | 403 => TavilyError::Unauthorized(message),
        code => TavilyError::Api { code, message },
    }
}
