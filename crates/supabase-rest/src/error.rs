//! Client Errors

use thiserror::Error;

/// Common result type for client operations
pub type Result<T> = std::result::Result<T, SupabaseError>;

/// Errors raised while talking to Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Transport failure or undecodable response body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the service
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    /// Local (de)serialization failure
    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Session persistence failure
    #[error("session storage unavailable: {0}")]
    Storage(String),

    /// Operation requires a signed-in user
    #[error("no active session")]
    NoSession,
}

impl SupabaseError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SupabaseError::Api { status, .. } => Some(*status),
            SupabaseError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// GoTrue uses `msg` / `error_description`, PostgREST uses `message`.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    const FIELDS: [&str; 4] = ["message", "msg", "error_description", "error"];

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in FIELDS {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}
