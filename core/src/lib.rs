//! Synchronous client core for the Twitter REST API v1.1.
//!
//! # Overview
//! Every call runs through the same pipeline:
//!
//! ```text
//! options ──request()──▶ HttpRequest ──Transport──▶ HttpResponse
//!     ──validate──▶ parse body ──▶ rate limit ──▶ TwitterResponse<T>
//! ```
//!
//! The core builds requests and interprets responses; the host supplies a
//! `Transport` that signs (OAuth 1.0a) and performs the round-trip, so the
//! library stays deterministic and testable without a network.
//!
//! # Design
//! - Options are plain structs validated only when the request is produced;
//!   a missing identifier is a `ValidationError` before any I/O.
//! - Raw endpoint groups (`TwitterOAuthClient::statuses()` etc.) return the
//!   response untouched. Typed groups (`TwitterHttpService::statuses()`)
//!   validate, parse and attach the rate limit.
//! - Models are immutable `serde` trees built once from the body.
//! - Errors are classified, never swallowed: validation, provider, schema,
//!   transport.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod model;
pub mod oauth;
pub mod options;
pub mod rate_limit;
pub mod response;
pub mod service;
pub mod transport;
pub mod validate;

pub use client::{TwitterOAuthClient, DEFAULT_BASE_URL};
pub use error::{ProviderError, SchemaError, TransportError, TwitterError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Params};
pub use oauth::{OAuthAccessToken, OAuthRequestToken};
pub use options::RequestOptions;
pub use rate_limit::RateLimit;
pub use response::{parse_response, TwitterResponse};
pub use service::TwitterHttpService;
pub use transport::{OAuthCredentials, Transport};
pub use validate::validate_response;
