//! Typed responses: the last stage of the pipeline.

use serde::de::DeserializeOwned;

use crate::error::TwitterError;
use crate::http::HttpResponse;
use crate::model::parse_json;
use crate::rate_limit::RateLimit;
use crate::validate::validate_response;

/// A parsed body together with the rate-limit window it was served in.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterResponse<T> {
    pub rate_limit: RateLimit,
    pub body: T,
}

impl<T> TwitterResponse<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TwitterResponse<U> {
        TwitterResponse {
            rate_limit: self.rate_limit,
            body: f(self.body),
        }
    }
}

/// Validate a raw response, parse its body and read the rate-limit headers.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<TwitterResponse<T>, TwitterError> {
    validate_response(&response)?;
    let body = parse_json(&response.body)?;
    let rate_limit = RateLimit::from_response(&response);
    Ok(TwitterResponse { rate_limit, body })
}
