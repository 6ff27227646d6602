//! Options for the `lists/*` calls.
//!
//! A list is identified either by `list_id`, or by its `slug` together with
//! the owner's id or screen name.

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};
use crate::model::ListMode;

use super::{count, id, require_text, require_user, set_flag, set_opt, set_user, text, RequestOptions};

fn set_list(
    params: &mut Params,
    list_id: Option<i64>,
    slug: &Option<String>,
    owner_id: Option<i64>,
    owner_screen_name: &Option<String>,
) -> Result<(), ValidationError> {
    if let Some(list_id) = id(list_id) {
        params.set("list_id", list_id);
        return Ok(());
    }
    let slug = text(slug).ok_or(ValidationError::MissingField("list_id"))?;
    if id(owner_id).is_none() && text(owner_screen_name).is_none() {
        return Err(ValidationError::MissingField("owner_id"));
    }
    params.set("slug", slug);
    set_user(params, ("owner_id", "owner_screen_name"), owner_id, owner_screen_name);
    Ok(())
}

/// `GET lists/show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetListOptions {
    pub list_id: Option<i64>,
    pub slug: Option<String>,
    pub owner_id: Option<i64>,
    pub owner_screen_name: Option<String>,
}

impl From<i64> for GetListOptions {
    fn from(list_id: i64) -> Self {
        Self {
            list_id: Some(list_id),
            ..Default::default()
        }
    }
}

impl GetListOptions {
    pub fn by_slug(slug: impl Into<String>, owner_screen_name: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            owner_screen_name: Some(owner_screen_name.into()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetListOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_list(&mut query, self.list_id, &self.slug, self.owner_id, &self.owner_screen_name)?;
        Ok(HttpRequest::get("/1.1/lists/show.json", query))
    }
}

/// `GET lists/list`: lists the user subscribes to, own lists included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetListsOptions {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub reverse: bool,
}

impl From<i64> for GetListsOptions {
    fn from(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

impl From<&str> for GetListsOptions {
    fn from(screen_name: &str) -> Self {
        Self {
            screen_name: Some(screen_name.to_string()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetListsOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
        set_flag(&mut query, "reverse", self.reverse, "true");
        Ok(HttpRequest::get("/1.1/lists/list.json", query))
    }
}

/// `GET lists/ownerships`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOwnershipsOptions {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub count: Option<u32>,
    pub cursor: Option<i64>,
}

impl From<i64> for GetOwnershipsOptions {
    fn from(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

impl From<&str> for GetOwnershipsOptions {
    fn from(screen_name: &str) -> Self {
        Self {
            screen_name: Some(screen_name.to_string()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetOwnershipsOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_user(self.user_id, &self.screen_name)?;

        let mut query = Params::new();
        set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "cursor", self.cursor);
        Ok(HttpRequest::get("/1.1/lists/ownerships.json", query))
    }
}

/// `GET lists/memberships`: lists the user has been added to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMembershipsOptions {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub count: Option<u32>,
    pub cursor: Option<i64>,
    pub filter_to_owned_lists: bool,
}

impl From<i64> for GetMembershipsOptions {
    fn from(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

impl From<&str> for GetMembershipsOptions {
    fn from(screen_name: &str) -> Self {
        Self {
            screen_name: Some(screen_name.to_string()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetMembershipsOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "cursor", self.cursor);
        set_flag(&mut query, "filter_to_owned_lists", self.filter_to_owned_lists, "true");
        Ok(HttpRequest::get("/1.1/lists/memberships.json", query))
    }
}

/// `GET lists/members`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMembersOptions {
    pub list_id: Option<i64>,
    pub slug: Option<String>,
    pub owner_id: Option<i64>,
    pub owner_screen_name: Option<String>,
    pub count: Option<u32>,
    pub cursor: Option<i64>,
    pub include_entities: Option<bool>,
    pub skip_status: bool,
}

impl From<i64> for GetMembersOptions {
    fn from(list_id: i64) -> Self {
        Self {
            list_id: Some(list_id),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetMembersOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_list(&mut query, self.list_id, &self.slug, self.owner_id, &self.owner_screen_name)?;
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "cursor", self.cursor);
        set_opt(&mut query, "include_entities", self.include_entities);
        set_flag(&mut query, "skip_status", self.skip_status, "true");
        Ok(HttpRequest::get("/1.1/lists/members.json", query))
    }
}

/// `POST lists/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateListOptions {
    pub name: String,
    pub mode: ListMode,
    pub description: Option<String>,
}

impl From<&str> for CreateListOptions {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl RequestOptions for CreateListOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_text(&self.name, "name")?;

        let mut body = Params::new();
        body.set("name", &self.name);
        body.set("mode", self.mode);
        set_opt(&mut body, "description", text(&self.description));
        Ok(HttpRequest::post("/1.1/lists/create.json", Params::new(), body))
    }
}

/// `POST lists/destroy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteListOptions {
    pub list_id: i64,
}

impl From<i64> for DeleteListOptions {
    fn from(list_id: i64) -> Self {
        Self { list_id }
    }
}

impl RequestOptions for DeleteListOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let list_id = id(Some(self.list_id)).ok_or(ValidationError::MissingField("list_id"))?;

        let mut body = Params::new();
        body.set("list_id", list_id);
        Ok(HttpRequest::post("/1.1/lists/destroy.json", Params::new(), body))
    }
}

macro_rules! member_options {
    ($(#[$meta:meta])* $ty:ident, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $ty {
            pub list_id: i64,
            pub user_id: Option<i64>,
            pub screen_name: Option<String>,
        }

        impl $ty {
            pub fn by_id(list_id: i64, user_id: i64) -> Self {
                Self {
                    list_id,
                    user_id: Some(user_id),
                    screen_name: None,
                }
            }

            pub fn by_screen_name(list_id: i64, screen_name: impl Into<String>) -> Self {
                Self {
                    list_id,
                    user_id: None,
                    screen_name: Some(screen_name.into()),
                }
            }
        }

        impl RequestOptions for $ty {
            fn request(&self) -> Result<HttpRequest, ValidationError> {
                let list_id = id(Some(self.list_id)).ok_or(ValidationError::MissingField("list_id"))?;
                require_user(self.user_id, &self.screen_name)?;

                let mut body = Params::new();
                body.set("list_id", list_id);
                set_user(&mut body, ("user_id", "screen_name"), self.user_id, &self.screen_name);
                Ok(HttpRequest::post($path, Params::new(), body))
            }
        }
    };
}

member_options!(
    /// `POST lists/members/create`.
    AddMemberOptions,
    "/1.1/lists/members/create.json"
);
member_options!(
    /// `POST lists/members/destroy`.
    RemoveMemberOptions,
    "/1.1/lists/members/destroy.json"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn get_list_uses_show() {
        let req = GetListOptions::from(574).request().unwrap();
        assert_eq!(req.url(), "/1.1/lists/show.json?list_id=574");
    }

    #[test]
    fn get_list_by_slug_needs_owner() {
        let req = GetListOptions::by_slug("team", "twitterapi").request().unwrap();
        assert_eq!(req.query.encode(), "slug=team&owner_screen_name=twitterapi");

        let err = GetListOptions {
            slug: Some("team".into()),
            ..Default::default()
        }
        .request()
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("owner_id"));

        assert_eq!(
            GetListOptions::default().request().unwrap_err(),
            ValidationError::MissingField("list_id")
        );
    }

    #[test]
    fn ownerships_require_user_memberships_do_not() {
        assert!(GetOwnershipsOptions::default().request().is_err());
        let req = GetOwnershipsOptions::from("jack").request().unwrap();
        assert_eq!(req.url(), "/1.1/lists/ownerships.json?screen_name=jack");

        let req = GetMembershipsOptions::default().request().unwrap();
        assert_eq!(req.url(), "/1.1/lists/memberships.json");
    }

    #[test]
    fn members_are_looked_up_by_list_id() {
        let req = GetMembersOptions {
            count: Some(100),
            ..GetMembersOptions::from(574)
        }
        .request()
        .unwrap();
        assert_eq!(req.url(), "/1.1/lists/members.json?list_id=574&count=100");
        assert!(!req.query.contains("user_id"));
    }

    #[test]
    fn create_list_sends_mode() {
        let req = CreateListOptions {
            mode: ListMode::Private,
            description: Some("friends".into()),
            ..CreateListOptions::from("team")
        }
        .request()
        .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.unwrap().encode(), "name=team&mode=private&description=friends");

        assert_eq!(
            CreateListOptions::default().request().unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn delete_list_requires_id() {
        assert!(DeleteListOptions::default().request().is_err());
        let req = DeleteListOptions::from(9).request().unwrap();
        assert_eq!(req.path, "/1.1/lists/destroy.json");
        assert_eq!(req.body.unwrap().get("list_id"), Some("9"));
    }

    #[test]
    fn member_changes_need_list_and_user() {
        let req = AddMemberOptions::by_screen_name(9, "jack").request().unwrap();
        assert_eq!(req.path, "/1.1/lists/members/create.json");
        assert_eq!(req.body.unwrap().encode(), "list_id=9&screen_name=jack");

        let req = RemoveMemberOptions::by_id(9, 12).request().unwrap();
        assert_eq!(req.path, "/1.1/lists/members/destroy.json");

        assert_eq!(
            RemoveMemberOptions {
                list_id: 9,
                ..Default::default()
            }
            .request()
            .unwrap_err(),
            ValidationError::MissingField("user_id")
        );
    }
}
