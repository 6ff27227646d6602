use crate::model::SearchTweetsResult;
use crate::options::SearchTweetsOptions;

endpoint_group! {
    /// `search/tweets`.
    SearchRawEndpoint, SearchEndpoint {
        fn search_tweets(SearchTweetsOptions) -> SearchTweetsResult;
    }
}
