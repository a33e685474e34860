// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Minimal HTML shells for the gated pages.

use crate::middleware::Session;
use crate::AppState;
use axum::{extract::Query, response::Html, routing::get, Router};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing))
        .route("/auth/login", get(landing))
        .route("/login", get(login))
        .route("/dashboard", get(dashboard))
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Roastrava</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    ))
}

async fn landing() -> Html<String> {
    page(
        "Welcome",
        "<h1>Roastrava</h1>\n\
         <p>Connect Strava and get roasted (or hyped) about your training.</p>\n\
         <p><a href=\"/api/auth/strava\">Connect with Strava</a></p>",
    )
}

#[derive(Deserialize)]
pub struct LoginParams {
    error: Option<String>,
}

/// Login page. Known error markers get a message; anything else a generic one.
async fn login(Query(params): Query<LoginParams>) -> Html<String> {
    let alert = match params.error.as_deref() {
        None => String::new(),
        Some("oauth_failed") => {
            "<p role=\"alert\">Strava sign-in failed. Please try again.</p>\n".to_string()
        }
        Some(_) => "<p role=\"alert\">Something went wrong. Please try again.</p>\n".to_string(),
    };

    page(
        "Sign in",
        &format!("<h1>Sign in</h1>\n{alert}<p><a href=\"/api/auth/strava\">Connect with Strava</a></p>"),
    )
}

async fn dashboard(session: Session) -> Html<String> {
    let athlete = session
        .athlete_id()
        .map(|id| format!("<p>Signed in as athlete {id}.</p>\n"))
        .unwrap_or_default();

    page(
        "Dashboard",
        &format!(
            "<h1>Dashboard</h1>\n{athlete}\
             <p>POST <code>/api/roast/me</code> with <code>{{\"type\", \"intensity\", \"language\"}}</code> to generate.</p>"
        ),
    )
}
