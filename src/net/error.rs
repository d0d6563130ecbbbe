//! Error taxonomy for every failure the client can observe.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Read failures are logged and leave view state as it
//! was; a 401 additionally clears the session identity. Mutation failures are
//! logged and otherwise dropped.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Maximum number of error body characters kept in a message.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("response error: {0}")]
    Parse(String),
    #[error("request error: {0}")]
    Serialization(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl AppError {
    /// Build an HTTP error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: error_message(body),
        }
    }

    /// True when the server rejected the session (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extract a readable message from an error body.
///
/// The API answers errors as `{"detail": "..."}`. Anything else is trimmed
/// and truncated.
fn error_message(body: &str) -> String {
    if let Ok(ErrorBody { detail }) = serde_json::from_str::<ErrorBody>(body) {
        let text = match detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };
        return truncate(&text);
    }
    truncate(body)
}

fn truncate(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "Request failed.".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
