//! In-memory imitation of the Twitter API v1.1 subset used by the client's
//! end-to-end tests.
//!
//! Every route expects an `Authorization: OAuth ...` header (the signature
//! itself is not checked) and every authorized response carries
//! `x-rate-limit-*` headers. Failures use Twitter's JSON `errors` envelope;
//! unknown routes answer with the legacy XML envelope.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

pub const RATE_LIMIT: i64 = 900;
pub const FIRST_STATUS_ID: i64 = 1050118621198921728;
pub const REQUEST_TOKEN: &str = "Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik";
pub const ACCESS_TOKEN: &str = "6253282-eWudHldSbIaelX7swmsiHImEL4KinwaGloHANdrY";

const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub description: String,
    pub followers_count: i64,
    pub statuses_count: i64,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub id_str: String,
    pub text: String,
    pub created_at: String,
    pub in_reply_to_status_id: Option<i64>,
    pub user: User,
}

#[derive(Deserialize)]
pub struct UpdateStatus {
    pub status: Option<String>,
    pub in_reply_to_status_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct ShowStatus {
    pub id: Option<i64>,
}

#[derive(Deserialize)]
pub struct UserLookup {
    pub user_id: Option<i64>,
    pub screen_name: Option<String>,
    pub count: Option<usize>,
}

#[derive(Deserialize)]
pub struct Verifier {
    pub oauth_verifier: Option<String>,
}

#[derive(Debug)]
pub struct Store {
    pub user: User,
    pub statuses: BTreeMap<i64, Status>,
    pub next_id: i64,
    pub remaining: i64,
    pub reset: i64,
}

impl Store {
    pub fn seeded() -> Self {
        Self {
            user: User {
                id: 6253282,
                id_str: "6253282".to_string(),
                name: "Twitter API".to_string(),
                screen_name: "TwitterAPI".to_string(),
                description: "The Real Twitter API.".to_string(),
                followers_count: 6133636,
                statuses_count: 0,
                created_at: "Wed May 23 06:01:13 +0000 2007".to_string(),
            },
            statuses: BTreeMap::new(),
            next_id: FIRST_STATUS_ID,
            remaining: RATE_LIMIT,
            reset: Utc::now().timestamp() + 15 * 60,
        }
    }

    fn find_user(&self, lookup: &UserLookup) -> Option<&User> {
        let by_id = lookup.user_id.is_some_and(|id| id == self.user.id);
        let by_name = lookup
            .screen_name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(&self.user.screen_name));
        (by_id || by_name).then_some(&self.user)
    }

    fn newest_first(&self, count: Option<usize>) -> Vec<Status> {
        self.statuses
            .values()
            .rev()
            .take(count.unwrap_or(20))
            .cloned()
            .collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/1.1/statuses/update.json", post(update_status))
        .route("/1.1/statuses/show.json", get(show_status))
        .route("/1.1/statuses/destroy/{file}", post(destroy_status))
        .route("/1.1/statuses/user_timeline.json", get(user_timeline))
        .route("/1.1/statuses/home_timeline.json", get(home_timeline))
        .route("/1.1/users/show.json", get(show_user))
        .route("/1.1/account/verify_credentials.json", get(verify_credentials))
        .route("/oauth/request_token", post(request_token))
        .route("/oauth/access_token", post(access_token))
        .fallback(page_not_found)
        .layer(middleware::from_fn_with_state(db.clone(), oauth_and_rate_limit))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Twitter's JSON error envelope.
pub fn twitter_error(status: StatusCode, code: i32, message: &str) -> Response {
    let body = json!({ "errors": [{ "code": code, "message": message }] });
    (status, Json(body)).into_response()
}

async fn oauth_and_rate_limit(State(db): State<Db>, request: Request, next: Next) -> Response {
    let signed = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("OAuth "));
    if !signed {
        tracing::warn!(path = %request.uri().path(), "rejecting unsigned request");
        return twitter_error(StatusCode::BAD_REQUEST, 215, "Bad Authentication data.");
    }

    let (remaining, reset) = {
        let mut store = db.write().await;
        store.remaining = (store.remaining - 1).max(0);
        (store.remaining, store.reset)
    };

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("x-rate-limit-limit", HeaderValue::from(RATE_LIMIT));
    headers.insert("x-rate-limit-remaining", HeaderValue::from(remaining));
    headers.insert("x-rate-limit-reset", HeaderValue::from(reset));
    response
}

async fn update_status(State(db): State<Db>, Form(input): Form<UpdateStatus>) -> Response {
    let Some(text) = input.status.filter(|text| !text.trim().is_empty()) else {
        return twitter_error(StatusCode::FORBIDDEN, 170, "Missing required parameter: status.");
    };

    let mut store = db.write().await;
    if store.statuses.values().any(|status| status.text == text) {
        return twitter_error(StatusCode::FORBIDDEN, 187, "Status is a duplicate.");
    }

    let id = store.next_id;
    store.next_id += 1;
    store.user.statuses_count += 1;
    let status = Status {
        id,
        id_str: id.to_string(),
        text,
        created_at: Utc::now().format(TWITTER_DATE_FORMAT).to_string(),
        in_reply_to_status_id: input.in_reply_to_status_id,
        user: store.user.clone(),
    };
    store.statuses.insert(id, status.clone());
    tracing::info!(id, "status created");
    Json(status).into_response()
}

async fn show_status(State(db): State<Db>, Query(query): Query<ShowStatus>) -> Response {
    let store = db.read().await;
    match query.id.and_then(|id| store.statuses.get(&id)) {
        Some(status) => Json(status.clone()).into_response(),
        None => twitter_error(StatusCode::NOT_FOUND, 144, "No status found with that ID."),
    }
}

async fn destroy_status(State(db): State<Db>, Path(file): Path<String>) -> Response {
    let Some(id) = file.strip_suffix(".json").and_then(|id| id.parse::<i64>().ok()) else {
        return page_not_found().await;
    };

    let mut store = db.write().await;
    match store.statuses.remove(&id) {
        Some(status) => {
            store.user.statuses_count -= 1;
            tracing::info!(id, "status destroyed");
            Json(status).into_response()
        }
        None => twitter_error(StatusCode::NOT_FOUND, 144, "No status found with that ID."),
    }
}

async fn user_timeline(State(db): State<Db>, Query(lookup): Query<UserLookup>) -> Response {
    let store = db.read().await;
    if store.find_user(&lookup).is_none() {
        return twitter_error(StatusCode::NOT_FOUND, 34, "Sorry, that page does not exist.");
    }
    Json(store.newest_first(lookup.count)).into_response()
}

async fn home_timeline(State(db): State<Db>, Query(lookup): Query<UserLookup>) -> Json<Vec<Status>> {
    Json(db.read().await.newest_first(lookup.count))
}

async fn show_user(State(db): State<Db>, Query(lookup): Query<UserLookup>) -> Response {
    let store = db.read().await;
    match store.find_user(&lookup) {
        Some(user) => Json(user.clone()).into_response(),
        None => twitter_error(StatusCode::NOT_FOUND, 50, "User not found."),
    }
}

async fn verify_credentials(State(db): State<Db>) -> Json<User> {
    Json(db.read().await.user.clone())
}

async fn request_token() -> Response {
    let body = format!("oauth_token={REQUEST_TOKEN}&oauth_token_secret=Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM&oauth_callback_confirmed=true");
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response()
}

async fn access_token(State(db): State<Db>, Form(input): Form<Verifier>) -> Response {
    if input.oauth_verifier.filter(|v| !v.trim().is_empty()).is_none() {
        return twitter_error(StatusCode::UNAUTHORIZED, 32, "Could not authenticate you.");
    }
    let store = db.read().await;
    let body = format!(
        "oauth_token={ACCESS_TOKEN}&oauth_token_secret=2EEfA6BG3ly3sR3RjE0IBSnlQu4ZrUzPiYKmrkVU&user_id={}&screen_name={}",
        store.user.id, store.user.screen_name
    );
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response()
}

async fn page_not_found() -> Response {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<errors>
  <error code="34">Sorry, that page does not exist</error>
</errors>"#;
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    )
        .into_response()
}
