//! Twitter lists.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum::{Display, EnumString};

use super::user::User;
use super::{date, null_default};

/// Visibility of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListMode {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TwitterList {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub id_str: String,
    #[serde(default, deserialize_with = "null_default")]
    pub slug: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,
    #[serde(deserialize_with = "date::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_default")]
    pub subscriber_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub member_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub mode: ListMode,
    #[serde(default, deserialize_with = "null_default")]
    pub following: bool,
    pub user: Option<User>,
}

impl TwitterList {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
