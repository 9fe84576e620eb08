//! API utilities for frontend-backend communication
//!
//! Provides the API base URL and the error type shared by all requests.

use thiserror::Error;

/// Get the base URL for API requests
///
/// Taken from the `CHAT_API_BASE` environment variable at compile time.
/// When unset, requests go to relative `/api/...` paths on the page origin,
/// which is how the widget is served in production.
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_base;
///
/// let url = format!("{}/api/documents", api_base());
/// ```
pub fn api_base() -> String {
    normalize_base(option_env!("CHAT_API_BASE").unwrap_or_default())
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Failure of a single API request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx status; `message` is the `error` field of the body when present
    #[error("HTTP {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },
    /// 2xx status with a body that does not match the contract
    #[error("failed to parse response: {0}")]
    Decode(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Text shown to the user: the server's own message verbatim, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
