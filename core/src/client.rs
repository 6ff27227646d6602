//! OAuth client: resolves prepared requests against the API base URL and
//! dispatches them through the transport.
//!
//! # Design
//! `TwitterOAuthClient` holds immutable configuration only: credentials,
//! base URL and the transport. It performs no validation or parsing of
//! responses; raw endpoint groups borrow it and return `HttpResponse`
//! values unchanged. The typed layer lives in `TwitterHttpService`.

use tracing::{debug, instrument, Span};

use crate::endpoints::{
    AccountRawEndpoint, FavoritesRawEndpoint, FollowersRawEndpoint, FriendsRawEndpoint, GeocodeRawEndpoint,
    ListsRawEndpoint, SearchRawEndpoint, StatusesRawEndpoint, UsersRawEndpoint,
};
use crate::error::{TwitterError, ValidationError};
use crate::http::{HttpRequest, HttpResponse, Params};
use crate::oauth::{parse_access_token, parse_request_token, OAuthAccessToken, OAuthRequestToken};
use crate::options::RequestOptions;
use crate::transport::{OAuthCredentials, Transport};

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

pub struct TwitterOAuthClient {
    base_url: String,
    credentials: OAuthCredentials,
    transport: Box<dyn Transport>,
}

impl TwitterOAuthClient {
    pub fn new(credentials: OAuthCredentials, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            transport: Box::new(transport),
        }
    }

    pub fn with_base_url(self, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &OAuthCredentials {
        &self.credentials
    }

    /// Produce the request for `options` and send it. The response is
    /// returned as received, whatever its status.
    pub fn execute(&self, options: &impl RequestOptions) -> Result<HttpResponse, TwitterError> {
        let request = options.request()?;
        self.send(request, &self.credentials)
    }

    #[instrument(
        name = "twitter_request",
        skip_all,
        fields(method = request.method.as_str(), path = %request.path, status = tracing::field::Empty)
    )]
    fn send(&self, mut request: HttpRequest, credentials: &OAuthCredentials) -> Result<HttpResponse, TwitterError> {
        request.path = self.resolve(&request.path);
        debug!(url = %request.url(), "dispatching request");

        let response = self.transport.execute(&request, credentials)?;
        Span::current().record("status", response.status);
        debug!(status = response.status, bytes = response.body.len(), "response received");
        Ok(response)
    }

    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{path}", self.base_url)
        }
    }

    /// Step one of the three-legged flow. Uses the consumer credentials
    /// only, and sends `oauth_callback` when one is configured.
    pub fn get_request_token(&self) -> Result<OAuthRequestToken, TwitterError> {
        let mut body = Params::new();
        if let Some(callback) = self.credentials.callback.as_deref().filter(|c| !c.is_empty()) {
            body.set("oauth_callback", callback);
        }
        let credentials = OAuthCredentials {
            token: String::new(),
            token_secret: String::new(),
            ..self.credentials.clone()
        };
        let response = self.send(HttpRequest::post("/oauth/request_token", Params::new(), body), &credentials)?;
        parse_request_token(&response)
    }

    /// Where to send the user to approve `token`.
    pub fn authorize_url(&self, token: &OAuthRequestToken) -> String {
        let query: Params = [("oauth_token", token.token.as_str())].into_iter().collect();
        format!("{}/oauth/authorize?{}", self.base_url, query.encode())
    }

    /// Step three: trade an approved request token and its verifier for an
    /// access token. The request is signed with the request token.
    pub fn get_access_token(
        &self,
        token: &OAuthRequestToken,
        verifier: &str,
    ) -> Result<OAuthAccessToken, TwitterError> {
        if verifier.trim().is_empty() {
            return Err(ValidationError::MissingField("oauth_verifier").into());
        }
        let mut body = Params::new();
        body.set("oauth_verifier", verifier);
        let credentials = self
            .credentials
            .clone()
            .with_token(token.token.clone(), token.token_secret.clone());
        let response = self.send(HttpRequest::post("/oauth/access_token", Params::new(), body), &credentials)?;
        parse_access_token(&response)
    }

    pub fn account(&self) -> AccountRawEndpoint<'_> {
        AccountRawEndpoint::new(self)
    }

    pub fn favorites(&self) -> FavoritesRawEndpoint<'_> {
        FavoritesRawEndpoint::new(self)
    }

    pub fn followers(&self) -> FollowersRawEndpoint<'_> {
        FollowersRawEndpoint::new(self)
    }

    pub fn friends(&self) -> FriendsRawEndpoint<'_> {
        FriendsRawEndpoint::new(self)
    }

    pub fn geocode(&self) -> GeocodeRawEndpoint<'_> {
        GeocodeRawEndpoint::new(self)
    }

    pub fn lists(&self) -> ListsRawEndpoint<'_> {
        ListsRawEndpoint::new(self)
    }

    pub fn search(&self) -> SearchRawEndpoint<'_> {
        SearchRawEndpoint::new(self)
    }

    pub fn statuses(&self) -> StatusesRawEndpoint<'_> {
        StatusesRawEndpoint::new(self)
    }

    pub fn users(&self) -> UsersRawEndpoint<'_> {
        UsersRawEndpoint::new(self)
    }
}

impl std::fmt::Debug for TwitterOAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterOAuthClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
