//! Results of `search/tweets`.

use serde::Deserialize;

use super::null_default;
use super::status::StatusMessage;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchTweetsResult {
    pub statuses: Vec<StatusMessage>,
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchMetadata {
    #[serde(default, deserialize_with = "null_default")]
    pub completed_in: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub max_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub since_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_default")]
    pub count: i64,
    pub next_results: Option<String>,
    pub refresh_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statuses_and_metadata() {
        let result: SearchTweetsResult = serde_json::from_str(
            r#"{
                "statuses": [
                    {"id": 2, "text": "second", "created_at": "Wed Oct 10 20:19:24 +0000 2018"},
                    {"id": 1, "text": "first", "created_at": "Tue Oct 09 20:19:24 +0000 2018"}
                ],
                "search_metadata": {
                    "completed_in": 0.047, "max_id": 2, "max_id_str": "2",
                    "next_results": "?max_id=0&q=rust&count=2", "query": "rust",
                    "refresh_url": "?since_id=2&q=rust", "count": 2, "since_id": 0
                }
            }"#,
        )
        .unwrap();
        let ids: Vec<i64> = result.statuses.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
        let meta = result.search_metadata.unwrap();
        assert_eq!(meta.query, "rust");
        assert_eq!(meta.count, 2);
        assert_eq!(meta.next_results.as_deref(), Some("?max_id=0&q=rust&count=2"));
    }
}
