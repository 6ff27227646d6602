//! Classification of raw responses into success or `ProviderError`.
//!
//! Twitter has used several error envelopes over time:
//! - `{"error": "message"}` for some OAuth failures,
//! - `{"errors": [{"code": 34, "message": "..."}]}` for most API calls,
//! - `<errors><error code="34">...</error></errors>` on legacy XML routes.
//!
//! A body that cannot be read in any of these shapes still produces a
//! `ProviderError`, with no message and code 0, so the HTTP failure is never
//! masked by a parse problem.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::http::HttpResponse;

/// Validate a raw response. HTTP 200 always passes, whatever the body.
pub fn validate_response(response: &HttpResponse) -> Result<(), ProviderError> {
    if response.status == 200 {
        return Ok(());
    }

    let (message, code) = match response.content_type().as_deref() {
        Some("application/json") => json_error(&response.body),
        Some("application/xml") | Some("text/xml") => xml_error(&response.body),
        _ => None,
    }
    .map_or((None, 0), |(message, code)| (non_blank(message), code));

    tracing::warn!(
        status = response.status,
        code,
        message = message.as_deref().unwrap_or(""),
        "Twitter API returned an error"
    );
    Err(ProviderError::new(response, message, code))
}

#[derive(Deserialize)]
struct JsonErrorEnvelope {
    error: Option<String>,
    #[serde(default)]
    errors: Vec<JsonErrorEntry>,
}

#[derive(Deserialize)]
struct JsonErrorEntry {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: i32,
}

fn non_blank(message: String) -> Option<String> {
    let trimmed = message.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn json_error(body: &str) -> Option<(String, i32)> {
    let envelope: JsonErrorEnvelope = serde_json::from_str(body).ok()?;
    if let Some(message) = envelope.error {
        return Some((message, 0));
    }
    envelope
        .errors
        .into_iter()
        .next()
        .map(|first| (first.message, first.code))
}

#[derive(Deserialize)]
struct XmlErrorEnvelope {
    #[serde(rename = "error", default)]
    errors: Vec<XmlErrorEntry>,
}

#[derive(Deserialize)]
struct XmlErrorEntry {
    #[serde(rename = "@code", default)]
    code: i32,
    #[serde(rename = "$text", default)]
    message: String,
}

fn xml_error(body: &str) -> Option<(String, i32)> {
    let envelope: XmlErrorEnvelope = quick_xml::de::from_str(body).ok()?;
    envelope
        .errors
        .into_iter()
        .next()
        .map(|first| (first.message, first.code))
}
