use crate::error::TwitterError;
use crate::http::HttpResponse;
use crate::model::StatusMessage;
use crate::options::{FavoriteStatusOptions, GetFavoritesOptions};
use crate::response::TwitterResponse;

endpoint_group! {
    /// `favorites/*` calls.
    FavoritesRawEndpoint, FavoritesEndpoint {
        fn get_favorites(GetFavoritesOptions) -> Vec<StatusMessage>;
        /// Create or destroy a favorite, depending on `options.action`.
        fn favorite_status(FavoriteStatusOptions) -> StatusMessage;
    }
}

impl FavoritesRawEndpoint<'_> {
    pub fn create_favorite(&self, id: i64) -> Result<HttpResponse, TwitterError> {
        self.favorite_status(FavoriteStatusOptions::create(id))
    }

    pub fn destroy_favorite(&self, id: i64) -> Result<HttpResponse, TwitterError> {
        self.favorite_status(FavoriteStatusOptions::destroy(id))
    }
}

impl FavoritesEndpoint<'_> {
    pub fn create_favorite(&self, id: i64) -> Result<TwitterResponse<StatusMessage>, TwitterError> {
        self.favorite_status(FavoriteStatusOptions::create(id))
    }

    pub fn destroy_favorite(&self, id: i64) -> Result<TwitterResponse<StatusMessage>, TwitterError> {
        self.favorite_status(FavoriteStatusOptions::destroy(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::RecordingTransport;
    use crate::client::TwitterOAuthClient;
    use crate::http::HttpMethod;
    use crate::service::TwitterHttpService;
    use crate::transport::OAuthCredentials;

    const STATUS: &str = r#"{"id": 20, "text": "just setting up my twttr", "created_at": "Tue Mar 21 20:50:14 +0000 2006", "favorited": true}"#;

    #[test]
    fn create_favorite_posts_id() {
        let transport = RecordingTransport::answering(200, "application/json", STATUS);
        let service = TwitterHttpService::new(TwitterOAuthClient::new(
            OAuthCredentials::new("ck", "cs"),
            transport.clone(),
        ));
        let status = service.favorites().create_favorite(20).unwrap().body;
        assert!(status.favorited);

        let (request, _) = transport.last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "https://api.twitter.com/1.1/favorites/create.json");
        assert_eq!(request.body.unwrap().get("id"), Some("20"));
    }

    #[test]
    fn destroy_favorite_raw() {
        let transport = RecordingTransport::answering(200, "application/json", STATUS);
        let service = TwitterHttpService::new(TwitterOAuthClient::new(
            OAuthCredentials::new("ck", "cs"),
            transport.clone(),
        ));
        service.favorites().raw().destroy_favorite(20).unwrap();
        assert_eq!(transport.last().0.path, "https://api.twitter.com/1.1/favorites/destroy.json");
    }

    #[test]
    fn get_favorites_parses_array() {
        let transport = RecordingTransport::answering(200, "application/json", &format!("[{STATUS}]"));
        let service = TwitterHttpService::new(TwitterOAuthClient::new(OAuthCredentials::new("ck", "cs"), transport));
        let statuses = service.favorites().get_favorites("jack").unwrap().body;
        assert_eq!(statuses[0].id, 20);
    }
}
