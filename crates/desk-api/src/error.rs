//! API client error types.

use thiserror::Error;

/// Errors that can occur when calling the Ticketdesk API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A success response whose body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// An authenticated request was attempted without a token.
    #[error("not signed in: run `desk auth login`")]
    NotAuthenticated,

    /// The client could not be constructed.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of an `Api` error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. } | Self::NotAuthenticated)
    }
}
