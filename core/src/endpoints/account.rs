use crate::model::User;
use crate::options::VerifyCredentialsOptions;

endpoint_group! {
    /// `account/*` calls.
    AccountRawEndpoint, AccountEndpoint {
        /// The authenticated user, or a provider error when the credentials
        /// are not valid.
        fn verify_credentials(VerifyCredentialsOptions) -> User;
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::RecordingTransport;
    use crate::client::TwitterOAuthClient;
    use crate::options::VerifyCredentialsOptions;
    use crate::service::TwitterHttpService;
    use crate::transport::OAuthCredentials;

    #[test]
    fn verify_credentials_parses_user() {
        let transport =
            RecordingTransport::answering(200, "application/json", r#"{"id":6253282,"screen_name":"TwitterAPI"}"#);
        let service = TwitterHttpService::new(TwitterOAuthClient::new(OAuthCredentials::new("ck", "cs"), transport));
        let user = service
            .account()
            .verify_credentials(VerifyCredentialsOptions::default())
            .unwrap()
            .body;
        assert_eq!(user.screen_name, "TwitterAPI");
    }
}
