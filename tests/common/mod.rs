// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use roastrava::config::Config;
use roastrava::routes::create_router;
use roastrava::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header as header_eq, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VALID_TOKEN: &str = "valid-access-token";
pub const ATHLETE_ID: u64 = 4242;

/// Router wired to local stub servers for Strava and Gemini.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub strava: MockServer,
    pub gemini: MockServer,
}

/// Create a test app with default config.
#[allow(dead_code)]
pub async fn create_test_app() -> TestApp {
    create_test_app_with(|_| {}).await
}

/// Create a test app, letting the caller adjust the config first.
#[allow(dead_code)]
pub async fn create_test_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let strava = MockServer::start().await;
    let gemini = MockServer::start().await;

    let mut config = Config {
        strava_api_base: format!("{}/api/v3", strava.uri()),
        strava_oauth_base: format!("{}/oauth", strava.uri()),
        gemini_api_base: gemini.uri(),
        ..Config::test_default()
    };
    customize(&mut config);

    let state = Arc::new(AppState::new(config).expect("app state"));

    TestApp {
        router: create_router(state.clone()),
        state,
        strava,
        gemini,
    }
}

/// GET request carrying the given cookie header.
#[allow(dead_code)]
pub fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// JSON POST request, optionally with a session cookie.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[allow(dead_code)]
pub fn session_cookie(token: &str) -> String {
    format!("strava_access_token={token}; strava_athlete_id={ATHLETE_ID}")
}

#[allow(dead_code)]
pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

#[allow(dead_code)]
pub fn find_cookie(headers: &[String], name: &str) -> String {
    headers
        .iter()
        .find(|value| value.starts_with(&format!("{name}=")))
        .cloned()
        .unwrap_or_else(|| panic!("missing Set-Cookie header for {name}: {headers:?}"))
}

#[allow(dead_code)]
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn sample_athlete() -> Value {
    json!({
        "id": ATHLETE_ID,
        "username": "sloth_runner",
        "firstname": "Sam",
        "lastname": "Lee",
        "city": "Bandung",
        "state": "West Java",
        "country": "Indonesia",
        "follower_count": 12,
        "friend_count": 30,
        "weight": 68.5,
        "ftp": 210,
        "profile": "https://dgalywyr863hv.cloudfront.net/pictures/athletes/1/large.jpg"
    })
}

#[allow(dead_code)]
pub fn sample_activities() -> Value {
    json!([{
        "id": 1,
        "name": "Lunch Shuffle",
        "distance": 5230.4,
        "moving_time": 1985,
        "elapsed_time": 2100,
        "total_elevation_gain": 14.2,
        "type": "Run",
        "start_date": "2026-10-01T05:30:00Z",
        "average_speed": 2.63,
        "max_speed": 3.9,
        "average_heartrate": 0,
        "max_heartrate": 0,
        "suffer_score": null
    }])
}

#[allow(dead_code)]
pub fn sample_stats() -> Value {
    let totals = json!({
        "count": 3,
        "distance": 15230.0,
        "moving_time": 5400,
        "elapsed_time": 5700,
        "elevation_gain": 40.0
    });
    json!({
        "recent_run_totals": totals,
        "ytd_run_totals": totals,
        "all_run_totals": totals
    })
}

/// Identity endpoint accepts `token`.
#[allow(dead_code)]
pub async fn mount_valid_token(strava: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .and(header_eq("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_athlete()))
        .mount(strava)
        .await;
}

/// Every Strava read rejects the token.
#[allow(dead_code)]
pub async fn mount_revoked_token(strava: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex("^/api/v3/.*"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Authorization Error",
            "errors": [{"resource": "Athlete", "field": "access_token", "code": "invalid"}]
        })))
        .mount(strava)
        .await;
}

/// Profile, activities and stats for the sample athlete.
#[allow(dead_code)]
pub async fn mount_athlete_data(strava: &MockServer) {
    mount_valid_token(strava, VALID_TOKEN).await;

    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_activities()))
        .mount(strava)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v3/athletes/{ATHLETE_ID}/stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_stats()))
        .mount(strava)
        .await;
}

/// Gemini answers every generation with `text`.
#[allow(dead_code)]
pub async fn mount_gemini_text(gemini: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/.+:generateContent$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })))
        .mount(gemini)
        .await;
}

/// Gemini fails every generation with an error payload.
#[allow(dead_code)]
pub async fn mount_gemini_error(gemini: &MockServer, status: u16, message: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/.+:generateContent$"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "error": {"code": status, "message": message, "status": "INVALID_ARGUMENT"}
        })))
        .mount(gemini)
        .await;
}
