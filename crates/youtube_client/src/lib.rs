//! Client for the upstream video search provider.
//!
//! The client returns an explicit `Result` carrying either the decoded search envelope or a
//! tagged [`UpstreamError`]; it never falls back on its own.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

mod client;
mod error;

pub use client::{DEFAULT_TIMEOUT, YOUTUBE_SEARCH_URL, YouTubeClient};
pub use error::UpstreamError;

/// Parameters of a single video-type search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: usize,
    pub api_key: String,
    pub related_to: Option<String>,
}

impl SearchRequest {
    /// Query string pairs sent to the search endpoint
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("q", self.query.clone()),
            ("maxResults", self.max_results.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(related_to) = self.related_to.as_deref().filter(|id| !id.is_empty()) {
            params.push(("relatedToVideoId", related_to.to_string()));
        }
        params
    }
}

/// Decoded body of a search call.
///
/// Items are kept loosely typed; shaping them is left to the caller so that one malformed
/// entry never fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
}

impl SearchListResponse {
    pub fn into_items(self) -> Vec<Value> {
        self.items.unwrap_or_default()
    }
}

/// Trait for upstream video search backends.
///
/// Implemented by [`YouTubeClient`] for production; tests substitute in-memory stubs.
#[async_trait]
pub trait VideoSearch: Send + Sync + std::fmt::Debug {
    /// Run one search call against the backend.
    ///
    /// # Errors
    /// - `UpstreamError::Timeout` - The call exceeded its timeout
    /// - `UpstreamError::Connection` - The backend could not be reached
    /// - `UpstreamError::Status` - The backend answered with a non-2xx status
    /// - `UpstreamError::Decode` - The body was not a valid search envelope
    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, UpstreamError>;
}
