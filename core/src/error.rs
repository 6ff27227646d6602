//! Error types for the Twitter API client.
//!
//! # Design
//! Failures are classified by where they originate, never recovered:
//! - `ValidationError`: the options object cannot produce a request. Raised
//!   before any network I/O.
//! - `ProviderError`: the API answered with a non-success status. Carries the
//!   provider's code and message plus the raw response for diagnostics.
//! - `SchemaError`: a successful response did not match the model tree.
//! - `TransportError`: raised by the transport and passed through unchanged.

use thiserror::Error;

use crate::http::HttpResponse;

/// Top-level error returned by every endpoint call.
#[derive(Debug, Error)]
pub enum TwitterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// The caller supplied insufficient or contradictory options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// The Twitter API reported a failure.
///
/// `code` is 0 when the response did not include a provider error code, and
/// `message` is `None` when the body could not be interpreted at all.
#[derive(Debug, Clone, Error)]
#[error("Twitter API returned HTTP {status}: {} (code {code})", .message.as_deref().unwrap_or("no error message"))]
pub struct ProviderError {
    pub status: u16,
    pub message: Option<String>,
    pub code: i32,
    pub response: HttpResponse,
}

impl ProviderError {
    pub(crate) fn new(response: &HttpResponse, message: Option<String>, code: i32) -> Self {
        Self {
            status: response.status,
            message,
            code,
            response: response.clone(),
        }
    }
}

/// A response passed validation but its body did not match the expected
/// shape. This means the client has drifted from the API.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("response body did not match the expected schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("response field `{field}` has invalid value `{value}`")]
    InvalidValue { field: &'static str, value: String },
}

/// A network-level failure reported by the transport.
#[derive(Debug, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
