use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::UpstreamError;
use crate::{SearchListResponse, SearchRequest, VideoSearch};

/// Public endpoint of the YouTube Data API search resource.
pub const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// reqwest-backed client for the YouTube search endpoint.
///
/// Performs exactly one GET per call. There is no retry, caching, or rate limiting; the
/// only bound is the request timeout set at construction.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    search_url: String,
}

impl YouTubeClient {
    /// Create a client for the public endpoint with the default timeout.
    ///
    /// # Errors
    /// - `UpstreamError::Request` - The HTTP client could not be initialised
    pub fn new() -> Result<Self, UpstreamError> {
        Self::with_config(YOUTUBE_SEARCH_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Create a client for a custom endpoint and timeout.
    ///
    /// # Errors
    /// - `UpstreamError::Request` - The HTTP client could not be initialised
    pub fn with_config(search_url: String, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, search_url })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, UpstreamError> {
        debug!(
            query = %request.query,
            max_results = request.max_results,
            related_to = ?request.related_to,
            "Calling YouTube search"
        );

        let response = self
            .client
            .get(&self.search_url)
            .query(&request.query_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
