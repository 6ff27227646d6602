//! Options for the social graph: `friends/*` and `followers/*`.
//!
//! Without a user the authenticated user is implied. Pages are selected
//! with a cursor; `-1` requests the first page.

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};

use super::{count, set_opt, set_user, RequestOptions};

macro_rules! user_shorthands {
    ($ty:ident) => {
        impl From<i64> for $ty {
            fn from(user_id: i64) -> Self {
                Self {
                    user_id: Some(user_id),
                    ..Default::default()
                }
            }
        }

        impl From<&str> for $ty {
            fn from(screen_name: &str) -> Self {
                Self {
                    screen_name: Some(screen_name.to_string()),
                    ..Default::default()
                }
            }
        }
    };
}

macro_rules! ids_options {
    ($(#[$meta:meta])* $ty:ident, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $ty {
            pub user_id: Option<i64>,
            pub screen_name: Option<String>,
            pub cursor: Option<i64>,
            pub count: Option<u32>,
        }

        impl RequestOptions for $ty {
            fn request(&self) -> Result<HttpRequest, ValidationError> {
                let mut query = Params::new();
                set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
                set_opt(&mut query, "cursor", self.cursor);
                set_opt(&mut query, "count", count(self.count));

                Ok(HttpRequest::get($path, query))
            }
        }

        user_shorthands!($ty);
    };
}

macro_rules! list_options {
    ($(#[$meta:meta])* $ty:ident, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $ty {
            pub user_id: Option<i64>,
            pub screen_name: Option<String>,
            pub cursor: Option<i64>,
            pub count: Option<u32>,
            pub skip_status: Option<bool>,
            pub include_user_entities: Option<bool>,
        }

        impl RequestOptions for $ty {
            fn request(&self) -> Result<HttpRequest, ValidationError> {
                let mut query = Params::new();
                set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
                set_opt(&mut query, "cursor", self.cursor);
                set_opt(&mut query, "count", count(self.count));
                set_opt(&mut query, "skip_status", self.skip_status);
                set_opt(&mut query, "include_user_entities", self.include_user_entities);

                Ok(HttpRequest::get($path, query))
            }
        }

        user_shorthands!($ty);
    };
}

ids_options!(
    /// `GET followers/ids`.
    FollowersIdsOptions,
    "/1.1/followers/ids.json"
);
ids_options!(
    /// `GET friends/ids`.
    FriendsIdsOptions,
    "/1.1/friends/ids.json"
);
list_options!(
    /// `GET followers/list`.
    FollowersListOptions,
    "/1.1/followers/list.json"
);
list_options!(
    /// `GET friends/list`.
    FriendsListOptions,
    "/1.1/friends/list.json"
);
