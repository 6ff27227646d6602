//! Options for the `favorites/*` calls.

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};
use crate::model::StatusMessage;

use super::{count, id, set_opt, set_user, RequestOptions};

/// `GET favorites/list`. Without a user the authenticated user is implied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFavoritesOptions {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub count: Option<u32>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub include_entities: Option<bool>,
}

impl From<i64> for GetFavoritesOptions {
    fn from(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

impl From<&str> for GetFavoritesOptions {
    fn from(screen_name: &str) -> Self {
        Self {
            screen_name: Some(screen_name.to_string()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetFavoritesOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "since_id", id(self.since_id));
        set_opt(&mut query, "max_id", id(self.max_id));
        set_opt(&mut query, "include_entities", self.include_entities);

        Ok(HttpRequest::get("/1.1/favorites/list.json", query))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoriteAction {
    #[default]
    Create,
    Destroy,
}

/// `POST favorites/create` and `POST favorites/destroy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteStatusOptions {
    pub action: FavoriteAction,
    pub id: i64,
    pub include_entities: Option<bool>,
}

impl FavoriteStatusOptions {
    pub fn create(id: i64) -> Self {
        Self {
            action: FavoriteAction::Create,
            id,
            include_entities: None,
        }
    }

    pub fn destroy(id: i64) -> Self {
        Self {
            action: FavoriteAction::Destroy,
            ..Self::create(id)
        }
    }
}

impl From<&StatusMessage> for FavoriteStatusOptions {
    fn from(status: &StatusMessage) -> Self {
        Self::create(status.id)
    }
}

impl RequestOptions for FavoriteStatusOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let id = id(Some(self.id)).ok_or(ValidationError::MissingField("id"))?;

        let mut body = Params::new();
        body.set("id", id);
        set_opt(&mut body, "include_entities", self.include_entities);

        let path = match self.action {
            FavoriteAction::Create => "/1.1/favorites/create.json",
            FavoriteAction::Destroy => "/1.1/favorites/destroy.json",
        };
        Ok(HttpRequest::post(path, Params::new(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn list_without_user_is_allowed() {
        let req = GetFavoritesOptions::default().request().unwrap();
        assert_eq!(req.url(), "/1.1/favorites/list.json");

        let req = GetFavoritesOptions {
            count: Some(10),
            ..GetFavoritesOptions::from("jack")
        }
        .request()
        .unwrap();
        assert_eq!(req.query.encode(), "screen_name=jack&count=10");
    }

    #[test]
    fn create_and_destroy_post_the_id() {
        let req = FavoriteStatusOptions::create(7).request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/1.1/favorites/create.json");
        assert_eq!(req.body.unwrap().get("id"), Some("7"));

        let req = FavoriteStatusOptions::destroy(7).request().unwrap();
        assert_eq!(req.path, "/1.1/favorites/destroy.json");
    }

    #[test]
    fn favorite_requires_id() {
        assert_eq!(
            FavoriteStatusOptions::default().request().unwrap_err(),
            ValidationError::MissingField("id")
        );
    }
}
