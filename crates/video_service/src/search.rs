use std::fmt;
use std::sync::Arc;

use datastore::Catalog;
use domain::{FallbackReason, SearchResponse};
use tracing::{debug, warn};
use youtube_client::{SearchRequest, VideoSearch};

use crate::normalizer::normalize;

/// Lower bound on results per search
pub const MIN_RESULTS: i64 = 1;

/// Upper bound on results per search
pub const MAX_RESULTS: i64 = 15;

/// Saturate a requested result count into `[MIN_RESULTS, MAX_RESULTS]`
pub fn clamp_max_results(requested: i64) -> usize {
    // Bounds are positive, so the cast cannot wrap.
    requested.clamp(MIN_RESULTS, MAX_RESULTS) as usize
}

/// Runs searches against the upstream provider, falling back to the sample catalog.
///
/// Holds no per-request state; clones share the same upstream client and catalog.
#[derive(Clone)]
pub struct SearchService {
    api_key: Option<String>,
    upstream: Arc<dyn VideoSearch>,
    catalog: Arc<dyn Catalog>,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("upstream", &self.upstream)
            .field("catalog_len", &self.catalog.len())
            .finish()
    }
}

impl SearchService {
    /// Create a search service. A blank `api_key` is treated as absent.
    pub fn new(
        api_key: Option<String>,
        upstream: Arc<dyn VideoSearch>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            upstream,
            catalog,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for videos, optionally biased toward those related to `related_to`.
    ///
    /// Always yields a well-formed response. Without an API key no network call is made;
    /// an upstream failure is reported through `reason` and `error` on a sample response.
    pub async fn search(
        &self,
        query: &str,
        max_results: i64,
        related_to: Option<&str>,
    ) -> SearchResponse {
        let max_results = clamp_max_results(max_results);
        let related_to = related_to.filter(|id| !id.is_empty()).map(str::to_string);

        let Some(api_key) = self.api_key.clone() else {
            debug!(query, "No API key configured, serving sample videos");
            return self.sample_response(
                query,
                related_to,
                max_results,
                FallbackReason::MissingApiKey,
                None,
            );
        };

        let request = SearchRequest {
            query: query.to_string(),
            max_results,
            api_key,
            related_to: related_to.clone(),
        };

        match self.upstream.search(&request).await {
            Ok(body) => {
                let raw_items = body.into_items();
                let received = raw_items.len();
                let mut items: Vec<_> = raw_items.iter().filter_map(normalize).collect();
                let dropped = received - items.len();
                // Upstream may ignore maxResults.
                items.truncate(max_results);
                debug!(
                    query,
                    received,
                    dropped,
                    returned = items.len(),
                    "YouTube search succeeded"
                );
                SearchResponse::live(query.to_string(), related_to, items)
            }
            Err(err) => {
                warn!(
                    query,
                    reason = err.tag(),
                    error = %err,
                    "YouTube search failed, serving sample videos"
                );
                self.sample_response(
                    query,
                    related_to,
                    max_results,
                    FallbackReason::Upstream(err.tag().to_string()),
                    Some(err.to_string()),
                )
            }
        }
    }

    fn sample_response(
        &self,
        query: &str,
        related_to: Option<String>,
        max_results: usize,
        reason: FallbackReason,
        error: Option<String>,
    ) -> SearchResponse {
        SearchResponse::fallback(
            query.to_string(),
            related_to,
            self.catalog.take(max_results),
            reason,
            error,
        )
    }
}
