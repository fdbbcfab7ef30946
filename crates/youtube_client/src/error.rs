use thiserror::Error;

/// Failure of a call to the upstream search endpoint.
///
/// Each variant maps to a stable class name through [`UpstreamError::tag`], which is what
/// callers report back to clients; the `Display` text is the human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// No connection could be established with the upstream host.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status}")]
    Status {
        /// HTTP status code of the response
        status: u16,
    },

    /// The response body was not the expected JSON envelope.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Any other failure while building or sending the request.
    #[error("request failed: {0}")]
    Request(String),
}

impl UpstreamError {
    /// Stable error-class name, used in `fallback:<tag>` reasons.
    pub fn tag(&self) -> &'static str {
        match self {
            UpstreamError::Timeout(_) => "Timeout",
            UpstreamError::Connection(_) => "ConnectionError",
            UpstreamError::Status { .. } => "HTTPError",
            UpstreamError::Decode(_) => "InvalidJSON",
            UpstreamError::Request(_) => "RequestException",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter.
        let err = err.without_url();
        if err.is_timeout() {
            UpstreamError::Timeout(err.to_string())
        } else if err.is_connect() {
            UpstreamError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            UpstreamError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Decode(err.to_string())
    }
}
