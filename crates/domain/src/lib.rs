use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the public watch page for a video id
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Represents one video in the canonical shape served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub published_at: Option<String>,
    pub description: String,
}

impl VideoResult {
    /// Build the watch page URL for a video id
    pub fn watch_url(video_id: &str) -> String {
        format!("{WATCH_URL_PREFIX}{video_id}")
    }
}

/// Where the items of a search response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Youtube,
    Sample,
}

/// Why a response was served from the sample catalog
///
/// Serialized as `missing_api_key` or `fallback:<error class>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FallbackReason {
    MissingApiKey,
    Upstream(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MissingApiKey => f.write_str("missing_api_key"),
            FallbackReason::Upstream(tag) => write!(f, "fallback:{tag}"),
        }
    }
}

impl From<FallbackReason> for String {
    fn from(reason: FallbackReason) -> Self {
        reason.to_string()
    }
}

impl TryFrom<String> for FallbackReason {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "missing_api_key" {
            return Ok(FallbackReason::MissingApiKey);
        }
        match value.strip_prefix("fallback:") {
            Some(tag) if !tag.is_empty() => Ok(FallbackReason::Upstream(tag.to_string())),
            _ => Err(format!("unknown fallback reason '{value}'")),
        }
    }
}

/// Envelope returned for every search, live or fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub source: SearchSource,
    pub query: String,
    pub related_to: Option<String>,
    pub count: usize,
    pub items: Vec<VideoResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FallbackReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Response built from a successful upstream call
    pub fn live(query: String, related_to: Option<String>, items: Vec<VideoResult>) -> Self {
        Self {
            source: SearchSource::Youtube,
            query,
            related_to,
            count: items.len(),
            items,
            reason: None,
            error: None,
        }
    }

    /// Response built from the sample catalog
    pub fn fallback(
        query: String,
        related_to: Option<String>,
        items: Vec<VideoResult>,
        reason: FallbackReason,
        error: Option<String>,
    ) -> Self {
        Self {
            source: SearchSource::Sample,
            query,
            related_to,
            count: items.len(),
            items,
            reason: Some(reason),
            error: error.filter(|e| !e.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(id: &str) -> VideoResult {
        VideoResult {
            id: id.to_string(),
            title: "Title".to_string(),
            channel: "Channel".to_string(),
            url: VideoResult::watch_url(id),
            thumbnail: None,
            published_at: None,
            description: String::new(),
        }
    }

    #[test]
    fn watch_url_appends_id() {
        assert_eq!(
            VideoResult::watch_url("abc123"),
            "https://www.youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn live_response_omits_reason_and_error() {
        let response = SearchResponse::live("yoga".to_string(), None, vec![video("a")]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["source"], "youtube");
        assert_eq!(value["count"], 1);
        assert_eq!(value["relatedTo"], serde_json::Value::Null);
        assert_eq!(value["items"][0]["publishedAt"], serde_json::Value::Null);
        assert!(value.get("reason").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn fallback_response_serializes_reason() {
        let response = SearchResponse::fallback(
            "yoga".to_string(),
            Some("vid".to_string()),
            vec![video("a"), video("b")],
            FallbackReason::Upstream("Timeout".to_string()),
            Some("operation timed out".to_string()),
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "source": "sample",
                "query": "yoga",
                "relatedTo": "vid",
                "count": 2,
                "items": [video("a"), video("b")],
                "reason": "fallback:Timeout",
                "error": "operation timed out",
            })
        );
    }

    #[test]
    fn empty_error_is_dropped() {
        let response = SearchResponse::fallback(
            "q".to_string(),
            None,
            Vec::new(),
            FallbackReason::MissingApiKey,
            Some(String::new()),
        );
        assert_eq!(response.error, None);
        assert_eq!(response.count, 0);
    }

    #[test]
    fn fallback_reason_parses_back() {
        let parsed: FallbackReason = serde_json::from_value(json!("fallback:HTTPError")).unwrap();
        assert_eq!(parsed, FallbackReason::Upstream("HTTPError".to_string()));

        let parsed: FallbackReason = serde_json::from_value(json!("missing_api_key")).unwrap();
        assert_eq!(parsed, FallbackReason::MissingApiKey);

        assert!(serde_json::from_value::<FallbackReason>(json!("fallback:")).is_err());
        assert!(serde_json::from_value::<FallbackReason>(json!("other")).is_err());
    }
}
