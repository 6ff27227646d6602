//! Twitter users.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::entities::UrlEntity;
use super::status::StatusMessage;
use super::{date, null_default};

/// A Twitter user.
///
/// Only `id` is required: responses requested with `trim_user` embed a user
/// object that carries nothing else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub id_str: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub screen_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub entities: UserEntities,
    #[serde(default, deserialize_with = "null_default")]
    pub protected: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub verified: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub followers_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub friends_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub listed_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub favourites_count: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub statuses_count: i64,
    #[serde(default, deserialize_with = "date::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    pub utc_offset: Option<i32>,
    pub time_zone: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub geo_enabled: bool,
    pub lang: Option<String>,
    pub profile_image_url_https: Option<String>,
    pub profile_banner_url: Option<String>,
    pub email: Option<String>,
    pub status: Option<Box<StatusMessage>>,
}

impl User {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// URL entities found in a user's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserEntities {
    #[serde(default, deserialize_with = "null_default")]
    pub url: UserEntityUrls,
    #[serde(default, deserialize_with = "null_default")]
    pub description: UserEntityUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserEntityUrls {
    #[serde(default, deserialize_with = "null_default")]
    pub urls: Vec<UrlEntity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trimmed_user_only_needs_id() {
        let user: User = serde_json::from_str(r#"{"id": 6253282, "id_str": "6253282"}"#).unwrap();
        assert_eq!(user.id, 6253282);
        assert!(user.screen_name.is_empty());
        assert!(user.created_at.is_none());
        assert!(user.status.is_none());
        assert_eq!(user.followers_count, 0);
    }

    #[test]
    fn full_user_profile() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 6253282,
                "id_str": "6253282",
                "name": "Twitter API",
                "screen_name": "TwitterAPI",
                "location": "San Francisco, CA",
                "description": "The Real Twitter API.",
                "url": "https://t.co/8IkCzCDr19",
                "entities": {
                    "url": {"urls": [{"url": "https://t.co/8IkCzCDr19", "expanded_url": "https://developer.twitter.com", "display_url": "developer.twitter.com", "indices": [0, 23]}]},
                    "description": {"urls": []}
                },
                "protected": false,
                "followers_count": 6133636,
                "friends_count": 12,
                "listed_count": 12936,
                "created_at": "Wed May 23 06:01:13 +0000 2007",
                "favourites_count": 31,
                "utc_offset": null,
                "time_zone": null,
                "verified": true,
                "statuses_count": 3656,
                "lang": null
            }"#,
        )
        .unwrap();
        assert_eq!(user.screen_name, "TwitterAPI");
        assert!(user.verified);
        assert!(user.has_description());
        assert_eq!(user.entities.url.urls[0].expanded_url, "https://developer.twitter.com");
        assert!(user.entities.description.urls.is_empty());
        assert_eq!(user.created_at, Some(Utc.with_ymd_and_hms(2007, 5, 23, 6, 1, 13).unwrap()));
        assert!(user.time_zone.is_none());
    }

    #[test]
    fn missing_id_is_a_schema_error() {
        let result: Result<User, _> = serde_json::from_str(r#"{"screen_name": "nobody"}"#);
        assert!(result.is_err());
    }
}
