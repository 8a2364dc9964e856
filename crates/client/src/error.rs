//! Errors surfaced by the pizza service gateway.

use thiserror::Error;

use crate::store::StoreError;

/// Code reported for failures that never produced an HTTP status.
pub const INTERNAL_ERROR_CODE: u16 = 500;

/// Errors that can occur when calling the pizza service or pizza factory.
///
/// Every variant has a [`code`](Self::code) and a [`message`](Self::message),
/// the two fields views display.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Encode error: {0}")]
    Encode(String),

    /// The request path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The session token could not be persisted or cleared.
    #[error("Token store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// HTTP status for service rejections, [`INTERNAL_ERROR_CODE`] otherwise.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            _ => INTERNAL_ERROR_CODE,
        }
    }

    /// The server-provided message, or the low-level error text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Transport(msg)
            | Self::Decode(msg)
            | Self::Encode(msg)
            | Self::InvalidUrl(msg) => msg.clone(),
            Self::Store(err) => err.to_string(),
        }
    }

    /// Whether the service rejected the caller's credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
