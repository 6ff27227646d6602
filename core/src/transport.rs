//! The seam between the pipeline and the network.
//!
//! The core never opens a socket. A `Transport` receives a prepared request
//! whose path is already absolute, signs it with the credentials (OAuth
//! 1.0a), performs the round-trip and hands back the raw response. Non-2xx
//! responses are data, not errors: only failures to get any response at all
//! are `TransportError`s.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Consumer and access-token credentials used to sign every request.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub token_secret: String,
    /// Sent as `oauth_callback` when requesting a request token.
    #[serde(default)]
    pub callback: Option<String>,
}

impl OAuthCredentials {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            ..Default::default()
        }
    }

    pub fn with_token(self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            token_secret: token_secret.into(),
            ..self
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .field("callback", &self.callback)
            .finish()
    }
}

/// Executes prepared requests. Must be safe to share between threads.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest, credentials: &OAuthCredentials) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest, credentials: &OAuthCredentials) -> Result<HttpResponse, TransportError> {
        (**self).execute(request, credentials)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest, credentials: &OAuthCredentials) -> Result<HttpResponse, TransportError> {
        (**self).execute(request, credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_deserialize_with_optional_token() {
        let creds: OAuthCredentials =
            serde_json::from_str(r#"{"consumer_key":"ck","consumer_secret":"cs"}"#).unwrap();
        assert_eq!(creds, OAuthCredentials::new("ck", "cs"));
        assert!(!creds.has_token());
        assert!(creds.with_token("t", "ts").has_token());
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = OAuthCredentials::new("ck", "very-secret").with_token("t", "also-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("ck"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("also-secret"));
    }
}
