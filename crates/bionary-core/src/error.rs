//! Error types for bionary-core.

use thiserror::Error;

/// Failures of a single call against the external API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS...).
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but its body was not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Non-2xx response. `detail` carries the server's message when it sent one.
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `detail` string from the error payload.
        detail: Option<String>,
    },

    /// A 2xx response without the field the endpoint promises.
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-provided `detail` message, if the error carries a non-empty one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }

    /// True when the server could not be reached or answered with garbage.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

/// Failures of the client-local token store.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backing storage rejected the operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored session could not be read or written as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
