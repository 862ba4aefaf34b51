//! Typed failures for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every network helper returns `Result<_, ApiError>`. Views never branch on
//! the variant beyond logging it; they surface a generic toast instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never produced a response (network, CORS, serialization).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend responded {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The call needs a signed-in session and there is none.
    #[error("not signed in")]
    NotAuthenticated,

    /// Called outside the browser (SSR).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error, pulling a human message out of the body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: status_message(body) }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::Status { status: 401, .. })
    }
}

/// Extract the most specific message from an error body.
///
/// The auth API uses `error_description`/`msg`, the table API `message`, and
/// storage `error`; anything else falls back to the trimmed raw body.
pub(crate) fn status_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { "empty response".to_owned() } else { trimmed.to_owned() }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Request(err.to_string())
    }
}
