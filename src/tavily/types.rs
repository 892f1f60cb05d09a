use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /search`. Everything except the query is pinned to the
/// options asteroid always searches with.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub search_depth: &'a str,
    pub topic: &'a str,
    pub time_range: &'a str,
    pub max_results: u8,
    pub include_images: bool,
    pub include_answer: bool,
    pub include_image_descriptions: bool,
}

/// Raw Tavily response. Every field the projection reads is optional;
/// defaults are applied when building the digest, never during decoding.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<ResultRecord>,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ResultRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub published_date: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRecord {
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Error body Tavily sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub error: Option<String>,
}

/// One normalized search result, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub title: String,
    pub url: String,
    pub published_date: String,
    pub content: String,
}

/// The three views derived from one response: cleaned answer text,
/// sources in response order, and image URL mapped to its description.
#[derive(Debug, Default, Clone)]
pub struct SearchDigest {
    pub answer: String,
    pub sources: Vec<SourceRecord>,
    pub images: BTreeMap<String, String>,
}
