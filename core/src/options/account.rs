//! Options for `account/verify_credentials`.

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};

use super::{set_flag, set_opt, RequestOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyCredentialsOptions {
    pub include_entities: Option<bool>,
    pub skip_status: bool,
    pub include_email: bool,
}

impl RequestOptions for VerifyCredentialsOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_opt(&mut query, "include_entities", self.include_entities);
        set_flag(&mut query, "skip_status", self.skip_status, "true");
        set_flag(&mut query, "include_email", self.include_email, "true");

        Ok(HttpRequest::get("/1.1/account/verify_credentials.json", query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_send_nothing() {
        let req = VerifyCredentialsOptions::default().request().unwrap();
        assert_eq!(req.url(), "/1.1/account/verify_credentials.json");
    }

    #[test]
    fn email_and_skip_status() {
        let req = VerifyCredentialsOptions {
            skip_status: true,
            include_email: true,
            ..Default::default()
        }
        .request()
        .unwrap();
        assert_eq!(req.query.encode(), "skip_status=true&include_email=true");
    }
}
