//! Error types for the Six Cities client.
//!
//! Request failures are values: they travel inside the rejected phase of an
//! action, so they are `Clone` and comparable.

use thiserror::Error;

/// Failure of a single backend round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not authorized")]
    Unauthorized,

    #[error("Request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Server error ({status})")]
    Server { status: u16 },

    #[error("Invalid response: {0}")]
    Decode(String),

    /// Informational or redirect status the client did not follow.
    #[error("Unexpected response status ({status})")]
    UnexpectedStatus { status: u16 },

    /// The request never produced an outcome (its task panicked or was
    /// cancelled).
    #[error("Request aborted: {0}")]
    Internal(String),
}

impl ApiError {
    /// Classifies a non-success HTTP status. `body` is the raw response body;
    /// when it is the backend's JSON error envelope its `message` is used.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            400..=499 => Self::Validation {
                status,
                message: error_message(body).unwrap_or_else(|| format!("HTTP {status}")),
            },
            500..=599 => Self::Server { status },
            _ => Self::UnexpectedStatus { status },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        Err(_) => Some(body.to_string()),
    }
}

/// Failures of the persistent key-value store backing the auth token.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
