//! The typed service root.

use crate::client::TwitterOAuthClient;
use crate::endpoints::{
    AccountEndpoint, FavoritesEndpoint, FollowersEndpoint, FriendsEndpoint, GeocodeEndpoint, ListsEndpoint,
    SearchEndpoint, StatusesEndpoint, UsersEndpoint,
};

/// Owns a `TwitterOAuthClient` and exposes the typed endpoint groups.
///
/// ```no_run
/// # use twitter_core::{OAuthCredentials, TwitterHttpService, TwitterOAuthClient, Transport};
/// # fn run(transport: impl Transport + 'static) -> Result<(), twitter_core::TwitterError> {
/// let credentials = OAuthCredentials::new("consumer-key", "consumer-secret").with_token("token", "secret");
/// let service = TwitterHttpService::new(TwitterOAuthClient::new(credentials, transport));
///
/// let posted = service.statuses().post_status_message("hello world")?;
/// println!("{} ({} calls left)", posted.body.id, posted.rate_limit.remaining);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TwitterHttpService {
    client: TwitterOAuthClient,
}

impl TwitterHttpService {
    pub fn new(client: TwitterOAuthClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TwitterOAuthClient {
        &self.client
    }

    pub fn account(&self) -> AccountEndpoint<'_> {
        AccountEndpoint::new(&self.client)
    }

    pub fn favorites(&self) -> FavoritesEndpoint<'_> {
        FavoritesEndpoint::new(&self.client)
    }

    pub fn followers(&self) -> FollowersEndpoint<'_> {
        FollowersEndpoint::new(&self.client)
    }

    pub fn friends(&self) -> FriendsEndpoint<'_> {
        FriendsEndpoint::new(&self.client)
    }

    pub fn geocode(&self) -> GeocodeEndpoint<'_> {
        GeocodeEndpoint::new(&self.client)
    }

    pub fn lists(&self) -> ListsEndpoint<'_> {
        ListsEndpoint::new(&self.client)
    }

    pub fn search(&self) -> SearchEndpoint<'_> {
        SearchEndpoint::new(&self.client)
    }

    pub fn statuses(&self) -> StatusesEndpoint<'_> {
        StatusesEndpoint::new(&self.client)
    }

    pub fn users(&self) -> UsersEndpoint<'_> {
        UsersEndpoint::new(&self.client)
    }
}

impl From<TwitterOAuthClient> for TwitterHttpService {
    fn from(client: TwitterOAuthClient) -> Self {
        Self::new(client)
    }
}
