//! Failures reported by the remote query layer.

use common::api_response::ApiErrorBody;
use reqwest::StatusCode;

/// The remote service could not produce a result.
///
/// `status` is `None` for transport errors (connection refused, timeout)
/// and for payloads that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct QueryFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl QueryFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// `"<status> - <reason> <detail>"`, where detail is the body's `error` field or the raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = format!(
            "{} - {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            ApiErrorBody::detail(body)
        );
        Self::new(Some(status.as_u16()), message.trim_end())
    }

    pub fn malformed(err: serde_json::Error) -> Self {
        Self::new(None, format!("Malformed response from search service: {}", err))
    }
}

impl From<reqwest::Error> for QueryFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.status().map(|s| s.as_u16()), err.to_string())
    }
}
