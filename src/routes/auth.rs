// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth authentication routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::middleware::session::{clear_session_cookies, set_session_cookies};
use crate::middleware::Session;
use crate::AppState;

/// Strava scopes needed to read the profile, activities and stats.
const STRAVA_SCOPE: &str = "read,activity:read";

/// Redirect target when the code exchange fails.
pub const OAUTH_FAILED_REDIRECT: &str = "/login?error=oauth_failed";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/strava", get(auth_start))
        .route("/api/auth/strava/callback", get(auth_callback))
        .route("/api/auth/logout", post(logout))
}

/// Start OAuth flow - redirect to Strava authorization.
async fn auth_start(State(state): State<Arc<AppState>>) -> Redirect {
    let auth_url = format!(
        "{}/authorize?\
         client_id={}&\
         redirect_uri={}&\
         response_type=code&\
         scope={}",
        state.config.strava_oauth_base,
        urlencoding::encode(&state.config.strava_client_id),
        urlencoding::encode(&state.config.oauth_callback_url()),
        STRAVA_SCOPE
    );

    tracing::info!(
        client_id = %state.config.strava_client_id,
        "Starting OAuth flow, redirecting to Strava"
    );

    Redirect::temporary(&auth_url)
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    /// Set by Strava when the user denied access.
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
struct CallbackError {
    error: &'static str,
}

/// OAuth callback - exchange the code for tokens and set session cookies.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Response {
    let Some(code) = params.code.filter(|code| !code.is_empty()) else {
        tracing::warn!(strava_error = ?params.error, "OAuth callback without authorization code");
        return (
            StatusCode::BAD_REQUEST,
            Json(CallbackError {
                error: "Authorization code is required",
            }),
        )
            .into_response();
    };

    tracing::info!("Exchanging authorization code for tokens");

    match state.strava.exchange_code(&code).await {
        Ok(bundle) => {
            tracing::info!(
                athlete_id = bundle.athlete_id,
                expires_in = bundle.expires_in,
                has_refresh_token = bundle.refresh_token.is_some(),
                "OAuth successful, setting session cookies"
            );
            let jar = set_session_cookies(jar, &bundle, state.config.production);
            (jar, Redirect::temporary("/dashboard")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Strava OAuth code exchange failed");
            Redirect::temporary(OAUTH_FAILED_REDIRECT).into_response()
        }
    }
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
    pub success: bool,
}

/// Logout - clear the session cookies and forget any cached validation.
async fn logout(
    State(state): State<Arc<AppState>>,
    session: Session,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
    if let Some(access_token) = session.access_token() {
        state.session_validator.invalidate(access_token);
    }

    tracing::info!(athlete_id = ?session.athlete_id(), "Logging out");

    (
        clear_session_cookies(jar, state.config.production),
        Json(LogoutResponse {
            message: "Logout successfully",
            success: true,
        }),
    )
}
