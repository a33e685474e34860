// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava read proxy tests.
//!
//! These tests verify that:
//! 1. Proxies reject requests without an access token cookie
//! 2. Upstream payloads pass through unchanged
//! 3. Upstream status and error bodies are propagated

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::{
    body_json, create_test_app, create_test_app_with, get_with_cookie, mount_athlete_data,
    sample_activities, sample_athlete, sample_stats, session_cookie, ATHLETE_ID, VALID_TOKEN,
};

#[tokio::test]
async fn test_proxies_require_access_token() {
    let app = create_test_app().await;

    for uri in [
        "/api/strava/athlete",
        "/api/strava/athlete/activities",
        "/api/strava/athlete/stats?athlete_id=1",
    ] {
        let response = app
            .router
            .clone()
            .oneshot(get_with_cookie(uri, Some("strava_athlete_id=1")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(
            body_json(response).await,
            json!({"error": "Authentication required"})
        );
    }
}

#[tokio::test]
async fn test_proxies_pass_upstream_payloads_through() {
    let app = create_test_app().await;
    mount_athlete_data(&app.strava).await;
    let cookie = session_cookie(VALID_TOKEN);

    let cases = [
        ("/api/strava/athlete", sample_athlete()),
        ("/api/strava/athlete/activities", sample_activities()),
        ("/api/strava/athlete/stats", sample_stats()),
    ];

    for (uri, expected) in cases {
        let response = app
            .router
            .clone()
            .oneshot(get_with_cookie(uri, Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, expected, "{uri}");
    }
}

#[tokio::test]
async fn test_activities_forwards_paging() {
    let app = create_test_app().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(header("authorization", "Bearer valid-access-token"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.strava)
        .await;

    let response = app
        .router
        .oneshot(get_with_cookie(
            "/api/strava/athlete/activities?page=2&per_page=5",
            Some(&session_cookie(VALID_TOKEN)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_activities_propagates_upstream_status_and_body() {
    let app = create_test_app().await;
    let upstream_error = json!({
        "message": "Rate Limit Exceeded",
        "errors": [{"resource": "Application", "field": "rate limit", "code": "exceeded"}]
    });
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(429).set_body_json(upstream_error.clone()))
        .mount(&app.strava)
        .await;

    let response = app
        .router
        .oneshot(get_with_cookie(
            "/api/strava/athlete/activities",
            Some(&session_cookie(VALID_TOKEN)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(response).await, json!({"error": upstream_error}));
}

#[tokio::test]
async fn test_transport_failure_is_500() {
    let app = create_test_app_with(|config| {
        config.strava_api_base = "http://127.0.0.1:9".to_string();
    })
    .await;

    let response = app
        .router
        .oneshot(get_with_cookie(
            "/api/strava/athlete/activities",
            Some(&session_cookie(VALID_TOKEN)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_stats_prefers_query_then_cookie() {
    let app = create_test_app().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athletes/77/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_stats()))
        .expect(1)
        .mount(&app.strava)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/athletes/{ATHLETE_ID}/stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_stats()))
        .expect(1)
        .mount(&app.strava)
        .await;

    let cookie = session_cookie(VALID_TOKEN);
    for uri in [
        "/api/strava/athlete/stats?athlete_id=77",
        "/api/strava/athlete/stats",
    ] {
        let response = app
            .router
            .clone()
            .oneshot(get_with_cookie(uri, Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_stats_without_athlete_id_is_bad_request() {
    let app = create_test_app().await;

    let response = app
        .router
        .oneshot(get_with_cookie(
            "/api/strava/athlete/stats",
            Some(&format!("strava_access_token={VALID_TOKEN}")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Athlete ID is required"})
    );
}
