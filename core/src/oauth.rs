//! OAuth 1.0a token exchange: request token, user authorization, access
//! token. Twitter answers both token calls with a form-encoded body.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::error::{SchemaError, TwitterError};
use crate::http::HttpResponse;
use crate::validate::validate_response;

/// A temporary token used to send the user to the authorization page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequestToken {
    pub token: String,
    pub token_secret: String,
    pub callback_confirmed: bool,
}

/// A long-lived token for acting on behalf of `screen_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthAccessToken {
    pub token: String,
    pub token_secret: String,
    pub user_id: i64,
    pub screen_name: String,
}

fn form_fields(response: &HttpResponse) -> Result<HashMap<String, String>, TwitterError> {
    validate_response(response)?;
    Ok(form_urlencoded::parse(response.body.trim().as_bytes())
        .into_owned()
        .collect())
}

fn take(fields: &mut HashMap<String, String>, key: &'static str) -> Result<String, SchemaError> {
    fields
        .remove(key)
        .filter(|value| !value.is_empty())
        .ok_or(SchemaError::MissingField(key))
}

pub fn parse_request_token(response: &HttpResponse) -> Result<OAuthRequestToken, TwitterError> {
    let mut fields = form_fields(response)?;
    Ok(OAuthRequestToken {
        token: take(&mut fields, "oauth_token")?,
        token_secret: take(&mut fields, "oauth_token_secret")?,
        callback_confirmed: fields
            .get("oauth_callback_confirmed")
            .is_some_and(|value| value == "true"),
    })
}

pub fn parse_access_token(response: &HttpResponse) -> Result<OAuthAccessToken, TwitterError> {
    let mut fields = form_fields(response)?;
    let user_id = take(&mut fields, "user_id")?;
    Ok(OAuthAccessToken {
        token: take(&mut fields, "oauth_token")?,
        token_secret: take(&mut fields, "oauth_token_secret")?,
        user_id: user_id.parse().map_err(|_| SchemaError::InvalidValue {
            field: "user_id",
            value: user_id.clone(),
        })?,
        screen_name: take(&mut fields, "screen_name")?,
    })
}
