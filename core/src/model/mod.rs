//! Domain models parsed from Twitter API v1.1 JSON bodies.
//!
//! # Design
//! Every model is a `serde::Deserialize` tree built exactly once from the
//! response body and never mutated afterwards. Optional nested objects are
//! `Option<_>` so an absent or `null` value parses to `None`; optional
//! scalars fall back to their zero value. A missing required field, or a
//! field of the wrong shape, fails the whole parse with `SchemaError`.

pub mod cursor;
pub mod date;
pub mod entities;
pub mod geo;
pub mod list;
pub mod search;
pub mod status;
pub mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::SchemaError;

pub use cursor::{IdList, ListCollection, UserCollection};
pub use date::{parse_date_time, parse_date_time_utc, TWITTER_DATE_FORMAT};
pub use entities::{
    format_entities, DefaultEntityFormatter, Entities, Entity, EntityFormatter, HashtagEntity, Indices,
    MediaEntity, MentionEntity, UrlEntity,
};
pub use geo::{BoundingBox, Coordinates, Granularity, Place, ReverseGeocode, ReverseGeocodeQuery, ReverseGeocodeResult};
pub use list::{ListMode, TwitterList};
pub use search::{SearchMetadata, SearchTweetsResult};
pub use status::{Contributor, ReplyTo, StatusMessage};
pub use user::{User, UserEntities, UserEntityUrls};

/// Parse a JSON body into a model.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, SchemaError> {
    Ok(serde_json::from_str(body)?)
}

/// Parse an optional JSON value. `None` and `null` both yield `Ok(None)`.
pub fn parse_value<T: DeserializeOwned>(value: Option<&Value>) -> Result<Option<T>, SchemaError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(T::deserialize(value)?)),
    }
}

/// Treat an explicit `null` the same as an absent field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
