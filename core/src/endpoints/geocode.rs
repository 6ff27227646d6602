use crate::model::{Place, ReverseGeocode};
use crate::options::{GetPlaceOptions, ReverseGeocodeOptions};

endpoint_group! {
    /// `geo/*` calls.
    GeocodeRawEndpoint, GeocodeEndpoint {
        fn get_place(GetPlaceOptions) -> Place;
        fn reverse_geocode(ReverseGeocodeOptions) -> ReverseGeocode;
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::RecordingTransport;
    use crate::client::TwitterOAuthClient;
    use crate::model::Granularity;
    use crate::service::TwitterHttpService;
    use crate::transport::OAuthCredentials;

    #[test]
    fn reverse_geocode_from_coordinates() {
        let body = r#"{
            "query": {"url": "https://api.twitter.com/1.1/geo/reverse_geocode.json?lat=41.9&long=12.5", "type": "reverse_geocode"},
            "result": {"places": [{"id": "7238f93a3e899af6", "place_type": "city", "name": "Rome", "centroid": [12.5, 41.9]}]}
        }"#;
        let transport = RecordingTransport::answering(200, "application/json", body);
        let service = TwitterHttpService::new(TwitterOAuthClient::new(OAuthCredentials::new("ck", "cs"), transport));
        let result = service.geocode().reverse_geocode((41.9, 12.5)).unwrap().body;
        let place = &result.result.places[0];
        assert_eq!(place.place_type, Granularity::City);
        assert_eq!(place.centroid.unwrap().longitude, 12.5);
    }
}
