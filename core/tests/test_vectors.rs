//! Verify request building and response handling against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Request vectors name a call and its primitive argument and describe the
//! expected request or validation failure. Response vectors describe a raw
//! response and the expected rate limit or provider error. Query and body
//! parameters are compared as maps, so parameter order does not matter.

use serde_json::{Map, Value};
use twitter_core::model::StatusMessage;
use twitter_core::options::{
    CreateListOptions, DeleteListOptions, DestroyStatusOptions, FavoriteStatusOptions, FollowersIdsOptions,
    FriendsListOptions, GetFavoritesOptions, GetListOptions, GetMembersOptions, GetOwnershipsOptions,
    GetPlaceOptions, GetStatusMessageOptions, GetUserOptions, GetUserTimelineOptions, PostStatusMessageOptions,
    RetweetStatusOptions, ReverseGeocodeOptions, SearchTweetsOptions, SearchUsersOptions, VerifyCredentialsOptions,
};
use twitter_core::{
    parse_response, HttpRequest, HttpResponse, Params, RequestOptions, TwitterError, ValidationError,
};

/// Build the options for one vector through the same primitive shorthands
/// the endpoint methods accept.
fn build_request(call: &str, arg: &Value) -> Result<HttpRequest, ValidationError> {
    let id = || arg.as_i64().unwrap_or_default();
    let text = || arg.as_str().unwrap_or_default();

    match call {
        "post_status_message" => PostStatusMessageOptions::from(text()).request(),
        "get_status_message" => GetStatusMessageOptions::from(id()).request(),
        "get_user_timeline" if arg.is_i64() => GetUserTimelineOptions::from(id()).request(),
        "get_user_timeline" => GetUserTimelineOptions::from(text()).request(),
        "retweet" => RetweetStatusOptions::from(id()).request(),
        "destroy_status_message" => DestroyStatusOptions::from(id()).request(),
        "get_user" if arg.is_i64() => GetUserOptions::from(id()).request(),
        "get_user" => GetUserOptions::from(text()).request(),
        "search_users" => SearchUsersOptions::from(text()).request(),
        "search_tweets" => SearchTweetsOptions::from(text()).request(),
        "get_list" => GetListOptions::from(id()).request(),
        "get_members" => GetMembersOptions::from(id()).request(),
        "get_ownerships" => GetOwnershipsOptions::from(text()).request(),
        "create_list" => CreateListOptions::from(text()).request(),
        "delete_list" => DeleteListOptions::from(id()).request(),
        "create_favorite" => FavoriteStatusOptions::create(id()).request(),
        "destroy_favorite" => FavoriteStatusOptions::destroy(id()).request(),
        "get_favorites" => GetFavoritesOptions::from(text()).request(),
        "followers_ids" => FollowersIdsOptions::from(text()).request(),
        "friends_list" => FriendsListOptions::from(id()).request(),
        "get_place" => GetPlaceOptions::from(text()).request(),
        "reverse_geocode" => {
            let point = arg.as_array().unwrap();
            ReverseGeocodeOptions::from((point[0].as_f64().unwrap(), point[1].as_f64().unwrap())).request()
        }
        "verify_credentials" => VerifyCredentialsOptions::default().request(),
        other => panic!("unknown call: {other}"),
    }
}

/// Render params as a JSON object, failing on duplicate keys.
fn params_json(name: &str, params: &Params) -> Value {
    let map: Map<String, Value> = params
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect();
    assert_eq!(map.len(), params.len(), "{name}: duplicate parameters");
    Value::Object(map)
}

fn parse_vector_response(value: &Value) -> HttpResponse {
    let headers = value["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    HttpResponse {
        status: value["status"].as_u64().unwrap() as u16,
        headers,
        body: value["body"].as_str().unwrap().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = build_request(case["call"].as_str().unwrap(), &case["arg"]);

        if let Some(field) = case["expected_error"].as_str() {
            let err = result.expect_err(name);
            assert_eq!(err, ValidationError::MissingField(field_name(field)), "{name}");
            continue;
        }

        let request = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected = &case["expected_request"];
        assert_eq!(request.method.as_str(), expected["method"], "{name}: method");
        assert_eq!(request.path, expected["path"].as_str().unwrap(), "{name}: path");
        assert_eq!(params_json(name, &request.query), expected["query"], "{name}: query");
        match &request.body {
            Some(body) => assert_eq!(params_json(name, body), expected["body"], "{name}: body"),
            None => assert!(expected["body"].is_null(), "{name}: unexpected body"),
        }
    }
}

/// `ValidationError::MissingField` holds a `&'static str`.
fn field_name(field: &str) -> &'static str {
    match field {
        "status" => "status",
        "id" => "id",
        "user_id" => "user_id",
        "q" => "q",
        "list_id" => "list_id",
        "name" => "name",
        "place_id" => "place_id",
        other => panic!("unexpected field in vector: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = parse_vector_response(&case["response"]);
        let result = parse_response::<Value>(response);

        if let Some(expected) = case.get("expected_error") {
            let err = match result {
                Err(TwitterError::Provider(err)) => err,
                other => panic!("{name}: expected provider error, got {other:?}"),
            };
            assert_eq!(u64::from(err.status), expected["status"].as_u64().unwrap(), "{name}: status");
            assert_eq!(i64::from(err.code), expected["code"].as_i64().unwrap(), "{name}: code");
            assert_eq!(err.message.as_deref(), expected["message"].as_str(), "{name}: message");
            continue;
        }

        let parsed = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected = &case["expected"]["rate_limit"];
        assert_eq!(parsed.rate_limit.limit, expected["limit"].as_i64().unwrap(), "{name}: limit");
        assert_eq!(parsed.rate_limit.remaining, expected["remaining"].as_i64().unwrap(), "{name}: remaining");
        assert_eq!(
            parsed.rate_limit.reset_at.to_rfc3339(),
            expected["reset_at"].as_str().unwrap(),
            "{name}: reset_at"
        );
    }
}

#[test]
fn status_fixture_through_the_typed_pipeline() {
    let response = HttpResponse {
        status: 200,
        headers: vec![
            ("content-type".to_string(), "application/json;charset=utf-8".to_string()),
            ("x-rate-limit-remaining".to_string(), "179".to_string()),
        ],
        body: include_str!("../../test-vectors/status.json").to_string(),
    };

    let parsed = parse_response::<StatusMessage>(response).unwrap();
    assert_eq!(parsed.body.id, 1050118621198921728);
    assert_eq!(parsed.body.user.as_ref().unwrap().screen_name, "TwitterAPI");
    assert_eq!(parsed.rate_limit.remaining, 179);
    assert_eq!(parsed.rate_limit.limit, -1);
}
