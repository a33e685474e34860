// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session gate for page navigation.
//!
//! Runs in front of every route. It resolves the [`Session`] once and stores
//! it in the request extensions. Gated paths then have their access token
//! checked against Strava before the handler runs.

use crate::middleware::session::{clear_session_cookies, Session};
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Landing page. Unauthenticated users end up here.
pub const LANDING_PATH: &str = "/";
/// Where a live session is sent from public-only pages.
pub const DASHBOARD_PATH: &str = "/dashboard";

const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/roast", "/profile"];
const PUBLIC_ONLY_PATHS: &[&str] = &["/", "/auth/login"];

/// How the gate treats a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Requires a live session.
    Protected,
    /// Only for visitors without a live session.
    PublicOnly,
    /// Always allowed.
    Neutral,
}

impl PathClass {
    pub fn of(path: &str) -> Self {
        let is_under = |prefix: &str| {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        };

        if PROTECTED_PREFIXES.iter().any(|prefix| is_under(prefix)) {
            PathClass::Protected
        } else if PUBLIC_ONLY_PATHS.contains(&path) {
            PathClass::PublicOnly
        } else {
            PathClass::Neutral
        }
    }
}

/// Middleware that enforces the page access rules.
pub async fn session_gate(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = Session::from_headers(request.headers());
    request.extensions_mut().insert(session.clone());

    let path = request.uri().path().to_string();
    let class = PathClass::of(&path);

    if class == PathClass::Neutral {
        return next.run(request).await;
    }

    let Some(access_token) = session.access_token() else {
        if class == PathClass::Protected {
            tracing::debug!(path = %path, "No session on protected path, redirecting to landing");
            return Redirect::temporary(LANDING_PATH).into_response();
        }
        return next.run(request).await;
    };

    match state.session_validator.validate(access_token).await {
        Ok(()) if class == PathClass::Protected => next.run(request).await,
        Ok(()) => {
            tracing::debug!(path = %path, "Live session on public-only path, redirecting to dashboard");
            Redirect::temporary(DASHBOARD_PATH).into_response()
        }
        Err(e) => {
            tracing::warn!(
                path = %path,
                athlete_id = ?session.athlete_id(),
                error = %e,
                "Session validation failed, clearing cookies"
            );
            state.session_validator.invalidate(access_token);
            let jar = clear_session_cookies(CookieJar::new(), state.config.production);
            (jar, Redirect::temporary(LANDING_PATH)).into_response()
        }
    }
}
