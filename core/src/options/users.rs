//! Options for the `users/*` calls.

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};

use super::{count, require_text, require_user, set_opt, set_user, RequestOptions};

/// `GET users/show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUserOptions {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub include_entities: Option<bool>,
}

impl From<i64> for GetUserOptions {
    fn from(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

impl From<&str> for GetUserOptions {
    fn from(screen_name: &str) -> Self {
        Self {
            screen_name: Some(screen_name.to_string()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetUserOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_user(self.user_id, &self.screen_name)?;

        let mut query = Params::new();
        set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
        set_opt(&mut query, "include_entities", self.include_entities);

        Ok(HttpRequest::get("/1.1/users/show.json", query))
    }
}

/// `GET users/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchUsersOptions {
    pub query: String,
    pub page: Option<u32>,
    pub count: Option<u32>,
    pub include_entities: Option<bool>,
}

impl From<&str> for SearchUsersOptions {
    fn from(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Default::default()
        }
    }
}

impl RequestOptions for SearchUsersOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_text(&self.query, "q")?;

        let mut query = Params::new();
        query.set("q", &self.query);
        set_opt(&mut query, "page", self.page.filter(|page| *page > 1));
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "include_entities", self.include_entities);

        Ok(HttpRequest::get("/1.1/users/search.json", query))
    }
}
