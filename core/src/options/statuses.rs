//! Options for the `statuses/*` calls.

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};
use crate::model::{Coordinates, StatusMessage};

use super::{count, id, require_text, require_user, set_flag, set_opt, set_user, text, RequestOptions, TweetMode};

/// `GET statuses/show`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetStatusMessageOptions {
    pub id: i64,
    pub trim_user: bool,
    pub include_my_retweet: bool,
    pub include_entities: bool,
    pub tweet_mode: TweetMode,
}

impl From<i64> for GetStatusMessageOptions {
    fn from(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

impl RequestOptions for GetStatusMessageOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let id = id(Some(self.id)).ok_or(ValidationError::MissingField("id"))?;

        let mut query = Params::new();
        query.set("id", id);
        set_flag(&mut query, "trim_user", self.trim_user, "true");
        set_flag(&mut query, "include_my_retweet", self.include_my_retweet, "true");
        set_flag(&mut query, "include_entities", self.include_entities, "true");
        self.tweet_mode.apply(&mut query);

        Ok(HttpRequest::get("/1.1/statuses/show.json", query))
    }
}

/// `POST statuses/update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostStatusMessageOptions {
    pub status: String,
    pub in_reply_to_status_id: Option<i64>,
    pub possibly_sensitive: bool,
    pub location: Option<Coordinates>,
    pub place_id: Option<String>,
    pub display_coordinates: bool,
}

impl PostStatusMessageOptions {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn reply(status: impl Into<String>, in_reply_to_status_id: i64) -> Self {
        Self {
            in_reply_to_status_id: Some(in_reply_to_status_id),
            ..Self::new(status)
        }
    }
}

impl From<&str> for PostStatusMessageOptions {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl From<String> for PostStatusMessageOptions {
    fn from(status: String) -> Self {
        Self::new(status)
    }
}

impl RequestOptions for PostStatusMessageOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_text(&self.status, "status")?;

        let mut body = Params::new();
        body.set("status", &self.status);
        set_opt(&mut body, "in_reply_to_status_id", id(self.in_reply_to_status_id));
        set_flag(&mut body, "possibly_sensitive", self.possibly_sensitive, "true");
        if let Some(location) = self.location {
            if !(-90.0..=90.0).contains(&location.latitude) {
                return Err(ValidationError::InvalidValue {
                    field: "lat",
                    reason: format!("{} is outside -90..90", location.latitude),
                });
            }
            if !(-180.0..=180.0).contains(&location.longitude) {
                return Err(ValidationError::InvalidValue {
                    field: "long",
                    reason: format!("{} is outside -180..180", location.longitude),
                });
            }
            body.set("lat", location.latitude);
            body.set("long", location.longitude);
        }
        set_opt(&mut body, "place_id", text(&self.place_id));
        set_flag(&mut body, "display_coordinates", self.display_coordinates, "true");

        Ok(HttpRequest::post("/1.1/statuses/update.json", Params::new(), body))
    }
}

/// `GET statuses/user_timeline`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetUserTimelineOptions {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub count: Option<u32>,
    pub trim_user: bool,
    pub exclude_replies: bool,
    pub contributor_details: bool,
    pub include_retweets: bool,
    pub tweet_mode: TweetMode,
}

impl Default for GetUserTimelineOptions {
    fn default() -> Self {
        Self {
            user_id: None,
            screen_name: None,
            since_id: None,
            max_id: None,
            count: None,
            trim_user: false,
            exclude_replies: false,
            contributor_details: false,
            include_retweets: true,
            tweet_mode: TweetMode::Compatibility,
        }
    }
}

impl From<i64> for GetUserTimelineOptions {
    fn from(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}

impl From<&str> for GetUserTimelineOptions {
    fn from(screen_name: &str) -> Self {
        Self {
            screen_name: Some(screen_name.to_string()),
            ..Default::default()
        }
    }
}

impl RequestOptions for GetUserTimelineOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_user(self.user_id, &self.screen_name)?;

        let mut query = Params::new();
        set_user(&mut query, ("user_id", "screen_name"), self.user_id, &self.screen_name);
        set_opt(&mut query, "since_id", id(self.since_id));
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "max_id", id(self.max_id));
        set_flag(&mut query, "trim_user", self.trim_user, "true");
        set_flag(&mut query, "exclude_replies", self.exclude_replies, "true");
        set_flag(&mut query, "contributor_details", self.contributor_details, "true");
        set_flag(&mut query, "include_rts", !self.include_retweets, "false");
        self.tweet_mode.apply(&mut query);

        Ok(HttpRequest::get("/1.1/statuses/user_timeline.json", query))
    }
}

/// Timelines of the authenticated user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimelineKind {
    #[default]
    Home,
    Mentions,
    RetweetsOfMe,
}

impl TimelineKind {
    fn path(self) -> &'static str {
        match self {
            TimelineKind::Home => "/1.1/statuses/home_timeline.json",
            TimelineKind::Mentions => "/1.1/statuses/mentions_timeline.json",
            TimelineKind::RetweetsOfMe => "/1.1/statuses/retweets_of_me.json",
        }
    }
}

/// `GET statuses/home_timeline`, `statuses/mentions_timeline` and
/// `statuses/retweets_of_me`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineOptions {
    pub kind: TimelineKind,
    pub count: Option<u32>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub trim_user: bool,
    pub exclude_replies: bool,
    pub include_retweets: bool,
    pub tweet_mode: TweetMode,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            kind: TimelineKind::Home,
            count: None,
            since_id: None,
            max_id: None,
            trim_user: false,
            exclude_replies: false,
            include_retweets: true,
            tweet_mode: TweetMode::Compatibility,
        }
    }
}

impl TimelineOptions {
    pub fn new(kind: TimelineKind, count: Option<u32>) -> Self {
        Self {
            kind,
            count,
            ..Default::default()
        }
    }
}

impl From<TimelineKind> for TimelineOptions {
    fn from(kind: TimelineKind) -> Self {
        Self::new(kind, None)
    }
}

impl RequestOptions for TimelineOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        let mut query = Params::new();
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "since_id", id(self.since_id));
        set_opt(&mut query, "max_id", id(self.max_id));
        set_flag(&mut query, "trim_user", self.trim_user, "true");
        set_flag(&mut query, "exclude_replies", self.exclude_replies, "true");
        set_flag(&mut query, "include_rts", !self.include_retweets, "false");
        self.tweet_mode.apply(&mut query);

        Ok(HttpRequest::get(self.kind.path(), query))
    }
}

/// `POST statuses/retweet/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetweetStatusOptions {
    pub id: i64,
    pub trim_user: bool,
}

/// `POST statuses/destroy/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestroyStatusOptions {
    pub id: i64,
    pub trim_user: bool,
}

macro_rules! status_action_options {
    ($ty:ident, $action:literal) => {
        impl From<i64> for $ty {
            fn from(id: i64) -> Self {
                Self { id, trim_user: false }
            }
        }

        impl From<&StatusMessage> for $ty {
            fn from(status: &StatusMessage) -> Self {
                Self::from(status.id)
            }
        }

        impl RequestOptions for $ty {
            fn request(&self) -> Result<HttpRequest, ValidationError> {
                let id = id(Some(self.id)).ok_or(ValidationError::MissingField("id"))?;

                let mut query = Params::new();
                set_flag(&mut query, "trim_user", self.trim_user, "true");

                Ok(HttpRequest::post(
                    format!(concat!("/1.1/statuses/", $action, "/{}.json"), id),
                    query,
                    Params::new(),
                ))
            }
        }
    };
}

status_action_options!(RetweetStatusOptions, "retweet");
status_action_options!(DestroyStatusOptions, "destroy");
