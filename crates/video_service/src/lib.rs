use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

pub mod normalizer;
pub mod search;

pub use normalizer::normalize;
pub use search::{MAX_RESULTS, MIN_RESULTS, SearchService, clamp_max_results};

/// Result count used when `max` is absent or not an integer
pub const DEFAULT_MAX_RESULTS: i64 = 6;

/// Query sent upstream when recommendations are requested for a video without text
pub const RECOMMENDATIONS_PLACEHOLDER_QUERY: &str = "videos recomendados";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationParams {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

/// Error body for rejected requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Validation failures of the search routes, reported as 400
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    QueryRequired,
    ParamsRequired,
}

impl ApiError {
    pub fn code(self) -> &'static str {
        match self {
            ApiError::QueryRequired => "query_required",
            ApiError::ParamsRequired => "params_required",
        }
    }

    fn message(self) -> &'static str {
        match self {
            ApiError::QueryRequired => "Agrega el parametro 'q' para buscar",
            ApiError::ParamsRequired => "Incluye 'videoId' o un parametro 'q'",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.message().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Parse the `max` query parameter.
///
/// Integers are clamped into range, including those too large for `i64`; anything else
/// yields [`DEFAULT_MAX_RESULTS`].
pub fn parse_limit(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_MAX_RESULTS;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(MIN_RESULTS, MAX_RESULTS),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => MAX_RESULTS,
            IntErrorKind::NegOverflow => MIN_RESULTS,
            _ => DEFAULT_MAX_RESULTS,
        },
    }
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

async fn youtube_search(
    State(service): State<SearchService>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = trimmed(params.q.as_deref());
    if query.is_empty() {
        return Err(ApiError::QueryRequired);
    }

    let max_results = parse_limit(params.max.as_deref());
    let response = service.search(query, max_results, None).await;
    Ok((StatusCode::OK, Json(response)))
}

async fn youtube_recommendations(
    State(service): State<SearchService>,
    Query(params): Query<RecommendationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let video_id = trimmed(params.video_id.as_deref());
    let query = trimmed(params.q.as_deref());
    if video_id.is_empty() && query.is_empty() {
        return Err(ApiError::ParamsRequired);
    }

    let query = if query.is_empty() {
        RECOMMENDATIONS_PLACEHOLDER_QUERY
    } else {
        query
    };
    let related_to = Some(video_id).filter(|id| !id.is_empty());

    let max_results = parse_limit(params.max.as_deref());
    let response = service.search(query, max_results, related_to).await;
    Ok((StatusCode::OK, Json(response)))
}

// Create the router for the video search API
pub fn create_router(service: SearchService) -> Router {
    Router::new()
        .route("/api/youtube/search", get(youtube_search))
        .route("/api/youtube/recommendations", get(youtube_recommendations))
        .with_state(service)
}
