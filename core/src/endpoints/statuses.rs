use crate::error::TwitterError;
use crate::http::HttpResponse;
use crate::model::StatusMessage;
use crate::options::{
    DestroyStatusOptions, GetStatusMessageOptions, GetUserTimelineOptions, PostStatusMessageOptions,
    RetweetStatusOptions, TimelineKind, TimelineOptions,
};
use crate::response::TwitterResponse;

endpoint_group! {
    /// `statuses/*` calls.
    StatusesRawEndpoint, StatusesEndpoint {
        fn get_status_message(GetStatusMessageOptions) -> StatusMessage;
        fn post_status_message(PostStatusMessageOptions) -> StatusMessage;
        fn get_user_timeline(GetUserTimelineOptions) -> Vec<StatusMessage>;
        /// Home, mentions or retweets-of-me, depending on `options.kind`.
        fn get_timeline(TimelineOptions) -> Vec<StatusMessage>;
        fn retweet(RetweetStatusOptions) -> StatusMessage;
        fn destroy_status_message(DestroyStatusOptions) -> StatusMessage;
    }
}

impl StatusesRawEndpoint<'_> {
    pub fn get_home_timeline(&self, count: Option<u32>) -> Result<HttpResponse, TwitterError> {
        self.get_timeline(TimelineOptions::new(TimelineKind::Home, count))
    }

    pub fn get_mentions_timeline(&self, count: Option<u32>) -> Result<HttpResponse, TwitterError> {
        self.get_timeline(TimelineOptions::new(TimelineKind::Mentions, count))
    }

    pub fn get_retweets_of_me(&self, count: Option<u32>) -> Result<HttpResponse, TwitterError> {
        self.get_timeline(TimelineOptions::new(TimelineKind::RetweetsOfMe, count))
    }
}

impl StatusesEndpoint<'_> {
    pub fn get_home_timeline(&self, count: Option<u32>) -> Result<TwitterResponse<Vec<StatusMessage>>, TwitterError> {
        self.get_timeline(TimelineOptions::new(TimelineKind::Home, count))
    }

    pub fn get_mentions_timeline(
        &self,
        count: Option<u32>,
    ) -> Result<TwitterResponse<Vec<StatusMessage>>, TwitterError> {
        self.get_timeline(TimelineOptions::new(TimelineKind::Mentions, count))
    }

    pub fn get_retweets_of_me(&self, count: Option<u32>) -> Result<TwitterResponse<Vec<StatusMessage>>, TwitterError> {
        self.get_timeline(TimelineOptions::new(TimelineKind::RetweetsOfMe, count))
    }
}
