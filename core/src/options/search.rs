//! Options for `search/tweets`.

use chrono::NaiveDate;
use strum::{Display, EnumString};

use crate::error::ValidationError;
use crate::http::{HttpRequest, Params};

use super::{count, id, require_text, set_opt, text, RequestOptions, TweetMode};

/// Which tweets a search prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchResultType {
    #[default]
    Mixed,
    Recent,
    Popular,
}

/// `GET search/tweets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTweetsOptions {
    pub query: String,
    /// `"latitude,longitude,radius"`, e.g. `"37.78,-122.39,1mi"`.
    pub geocode: Option<String>,
    pub lang: Option<String>,
    pub locale: Option<String>,
    pub result_type: Option<SearchResultType>,
    pub count: Option<u32>,
    /// Tweets created before this date.
    pub until: Option<NaiveDate>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub include_entities: Option<bool>,
    pub tweet_mode: TweetMode,
}

impl From<&str> for SearchTweetsOptions {
    fn from(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Default::default()
        }
    }
}

impl RequestOptions for SearchTweetsOptions {
    fn request(&self) -> Result<HttpRequest, ValidationError> {
        require_text(&self.query, "q")?;

        let mut query = Params::new();
        query.set("q", &self.query);
        set_opt(&mut query, "geocode", text(&self.geocode));
        set_opt(&mut query, "lang", text(&self.lang));
        set_opt(&mut query, "locale", text(&self.locale));
        set_opt(&mut query, "result_type", self.result_type);
        set_opt(&mut query, "count", count(self.count));
        set_opt(&mut query, "until", self.until.map(|date| date.format("%Y-%m-%d")));
        set_opt(&mut query, "since_id", id(self.since_id));
        set_opt(&mut query, "max_id", id(self.max_id));
        set_opt(&mut query, "include_entities", self.include_entities);
        self.tweet_mode.apply(&mut query);

        Ok(HttpRequest::get("/1.1/search/tweets.json", query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn query_is_required() {
        assert_eq!(
            SearchTweetsOptions::default().request().unwrap_err(),
            ValidationError::MissingField("q")
        );
    }

    #[test]
    fn query_is_form_encoded() {
        let req = SearchTweetsOptions::from("#rust @jack").request().unwrap();
        assert_eq!(req.url(), "/1.1/search/tweets.json?q=%23rust+%40jack");
    }

    #[test]
    fn optional_filters() {
        let req = SearchTweetsOptions {
            result_type: Some(SearchResultType::Recent),
            count: Some(100),
            until: NaiveDate::from_ymd_opt(2021, 1, 31),
            tweet_mode: TweetMode::Extended,
            ..SearchTweetsOptions::from("rust")
        }
        .request()
        .unwrap();
        assert_eq!(
            req.query.encode(),
            "q=rust&result_type=recent&count=100&until=2021-01-31&tweet_mode=extended"
        );
    }

    #[test]
    fn result_type_round_trips_through_text() {
        assert_eq!(SearchResultType::from_str("Popular").unwrap(), SearchResultType::Popular);
        assert_eq!(SearchResultType::Mixed.to_string(), "mixed");
    }
}
