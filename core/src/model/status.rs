//! Status messages (tweets).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::entities::{format_entities, Entities, EntityFormatter};
use super::geo::{Coordinates, Place};
use super::user::User;
use super::{date, null_default};

/// A status message.
///
/// `text` is read from `full_text` when the request used the extended
/// tweet mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusMessage {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub id_str: String,
    #[serde(alias = "full_text")]
    pub text: String,
    #[serde(deserialize_with = "date::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_default")]
    pub truncated: bool,
    pub in_reply_to_status_id: Option<i64>,
    pub in_reply_to_user_id: Option<i64>,
    pub in_reply_to_screen_name: Option<String>,
    pub user: Option<User>,
    #[serde(default, deserialize_with = "null_default")]
    pub entities: Entities,
    pub coordinates: Option<Coordinates>,
    pub place: Option<Place>,
    #[serde(default, deserialize_with = "null_default")]
    pub contributors: Vec<Contributor>,
    #[serde(default, deserialize_with = "null_default")]
    pub retweet_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub favorite_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub favorited: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub retweeted: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub possibly_sensitive: bool,
    pub lang: Option<String>,
    pub retweeted_status: Option<Box<StatusMessage>>,
    pub quoted_status: Option<Box<StatusMessage>>,
}

/// The status and user a status message replies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTo {
    pub status_id: i64,
    pub user_id: i64,
    pub screen_name: String,
}

/// A user who contributed to a status on behalf of its author.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    #[serde(rename = "id")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub screen_name: String,
}

impl StatusMessage {
    /// `None` unless the message is a reply to another status.
    pub fn reply_to(&self) -> Option<ReplyTo> {
        let status_id = self.in_reply_to_status_id?;
        Some(ReplyTo {
            status_id,
            user_id: self.in_reply_to_user_id.unwrap_or_default(),
            screen_name: self.in_reply_to_screen_name.clone().unwrap_or_default(),
        })
    }

    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// The text with every entity span rendered by `formatter`.
    pub fn format_text(&self, formatter: &dyn EntityFormatter) -> String {
        format_entities(&self.text, &self.entities.all(), formatter)
    }
}
