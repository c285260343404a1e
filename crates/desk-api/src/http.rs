//! Shared response helpers.
//!
//! Non-success statuses become [`ApiError::Api`] with a human-readable message
//! pulled from the body. The backend reports errors as
//! `{"message": "..."}`, `{"message": ["...", "..."]}` (validation), or
//! `{"error": "..."}`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Return the response unchanged on success, or an [`ApiError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(status.as_u16(), &body),
    })
}

/// Pick the message out of an error body.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let from_field = |field: &str| -> Option<String> {
        match parsed.as_ref()?.get(field)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                (!joined.is_empty()).then_some(joined)
            }
            _ => None,
        }
    };
    from_field("message")
        .or_else(|| from_field("error"))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Decode a success body. An empty body decodes as JSON `null`.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let result = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|e| ApiError::Parse(e.to_string()))
}
