//! Client error taxonomy.

use thiserror::Error;

use shelfmark_format::ValidationError;

/// Errors from backend calls and commit-mode minting.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The format failed client-side validation; nothing was sent. The
    /// carried errors are positioned per element for inline display.
    #[error("format failed validation with {} error(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    /// The backend rejected the request with a structured error envelope.
    #[error("API error ({status} {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Transport-level failure (connect, TLS, timeout, malformed body).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The client itself could not be constructed.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Validation findings when this is a local refusal, for inline display.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            ClientError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// True for 404 responses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
