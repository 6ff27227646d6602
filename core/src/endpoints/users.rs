use crate::model::User;
use crate::options::{GetUserOptions, SearchUsersOptions};

endpoint_group! {
    /// `users/*` calls.
    UsersRawEndpoint, UsersEndpoint {
        fn get_user(GetUserOptions) -> User;
        fn search_users(SearchUsersOptions) -> Vec<User>;
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::RecordingTransport;
    use crate::client::TwitterOAuthClient;
    use crate::error::TwitterError;
    use crate::service::TwitterHttpService;
    use crate::transport::OAuthCredentials;

    #[test]
    fn get_user_by_screen_name() {
        let transport = RecordingTransport::answering(200, "application/json", r#"{"id":12,"screen_name":"jack"}"#);
        let service = TwitterHttpService::new(TwitterOAuthClient::new(
            OAuthCredentials::new("ck", "cs"),
            transport.clone(),
        ));
        let user = service.users().get_user("jack").unwrap().body;
        assert_eq!(user.id, 12);
        assert_eq!(
            transport.last().0.url(),
            "https://api.twitter.com/1.1/users/show.json?screen_name=jack"
        );
    }

    #[test]
    fn raw_layer_does_not_validate() {
        let transport = RecordingTransport::answering(
            404,
            "application/json",
            r#"{"errors":[{"code":50,"message":"User not found."}]}"#,
        );
        let service = TwitterHttpService::new(TwitterOAuthClient::new(OAuthCredentials::new("ck", "cs"), transport));
        let raw = service.users().raw().get_user(99).unwrap();
        assert_eq!(raw.status, 404);

        let err = service.users().get_user(99).unwrap_err();
        assert!(matches!(err, TwitterError::Provider(ref e) if e.code == 50));
    }

    #[test]
    fn search_users_returns_array() {
        let transport = RecordingTransport::answering(200, "application/json", r#"[{"id":1},{"id":2},{"id":3}]"#);
        let service = TwitterHttpService::new(TwitterOAuthClient::new(OAuthCredentials::new("ck", "cs"), transport));
        let users = service.users().search_users("rust").unwrap().body;
        assert_eq!(users.len(), 3);
    }
}
