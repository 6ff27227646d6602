//! Request options: one type per API call.
//!
//! # Design
//! Options are plain structs with public fields and `Default`, so they can
//! be built with struct-update syntax and changed freely until the request
//! is produced. Validation happens only in `RequestOptions::request`, before
//! any I/O. Optional parameters are `Option<_>` and are sent only when set.
//! A 0 id or a blank string counts as unset, so a wire parameter never
//! stands in for the provider default.
//!
//! Primitive shorthands (an id, a screen name, a status text) are `From`
//! conversions into the canonical options type. Endpoint methods accept
//! `impl Into<Options>` and never build requests themselves.

pub mod account;
pub mod favorites;
pub mod geocode;
pub mod graph;
pub mod lists;
pub mod search;
pub mod statuses;
pub mod users;

use strum::{Display, EnumString};

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};

pub use account::VerifyCredentialsOptions;
pub use favorites::{FavoriteAction, FavoriteStatusOptions, GetFavoritesOptions};
pub use geocode::{GetPlaceOptions, ReverseGeocodeOptions};
pub use graph::{FollowersIdsOptions, FollowersListOptions, FriendsIdsOptions, FriendsListOptions};
pub use lists::{
    AddMemberOptions, CreateListOptions, DeleteListOptions, GetListOptions, GetListsOptions, GetMembersOptions,
    GetMembershipsOptions, GetOwnershipsOptions, RemoveMemberOptions,
};
pub use search::{SearchResultType, SearchTweetsOptions};
pub use statuses::{
    DestroyStatusOptions, GetStatusMessageOptions, GetUserTimelineOptions, PostStatusMessageOptions,
    RetweetStatusOptions, TimelineKind, TimelineOptions,
};
pub use users::{GetUserOptions, SearchUsersOptions};

/// Turns a set of options into a prepared request.
pub trait RequestOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError>;
}

/// Whether extended tweets are returned with `full_text`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TweetMode {
    #[default]
    Compatibility,
    Extended,
}

impl TweetMode {
    pub(crate) fn apply(self, params: &mut Params) {
        if self != TweetMode::Compatibility {
            params.set("tweet_mode", self);
        }
    }
}

pub(crate) fn set_opt<T: ToString>(params: &mut Params, key: &str, value: Option<T>) {
    if let Some(value) = value {
        params.set(key, value);
    }
}

/// Sends `value` only when `flag` is set; the provider default is the
/// opposite.
pub(crate) fn set_flag(params: &mut Params, key: &str, flag: bool, value: &str) {
    if flag {
        params.set(key, value);
    }
}

pub(crate) fn id(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

/// Counts and page sizes of zero leave the provider default in place.
pub(crate) fn count(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Sets `user_id` and/or `screen_name` under the given keys.
pub(crate) fn set_user(
    params: &mut Params,
    keys: (&str, &str),
    user_id: Option<i64>,
    screen_name: &Option<String>,
) {
    set_opt(params, keys.0, id(user_id));
    set_opt(params, keys.1, text(screen_name));
}

pub(crate) fn require_user(user_id: Option<i64>, screen_name: &Option<String>) -> Result<(), ValidationError> {
    if id(user_id).is_none() && text(screen_name).is_none() {
        return Err(ValidationError::MissingField("user_id"));
    }
    Ok(())
}

pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
