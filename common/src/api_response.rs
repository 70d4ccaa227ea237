//! Response envelopes returned by the search service.

use serde::{Deserialize, Serialize};


/// Successful responses wrap their payload as `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Error bodies usually look like `{"error": "..."}`, but anything is possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Human readable detail: the `error` field if present, else the raw body text.
    pub fn detail(raw_body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(raw_body) {
            Ok(ApiErrorBody { error: Some(error) }) => error,
            _ => raw_body.trim().to_string(),
        }
    }
}
