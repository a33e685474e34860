// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cookie-backed session descriptor.
//!
//! The three session cookies are read once per request into an immutable
//! [`Session`]. Handlers take it as an extractor instead of reading cookies
//! themselves.

use crate::error::AppError;
use crate::models::TokenBundle;
use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;

pub const ACCESS_TOKEN_COOKIE: &str = "strava_access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "strava_refresh_token";
pub const ATHLETE_ID_COOKIE: &str = "strava_athlete_id";

/// Lifetime of the refresh token and athlete id cookies (30 days).
pub const LONG_LIVED_COOKIE_SECS: i64 = 30 * 24 * 60 * 60;

/// Session state carried by the request cookies.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
    athlete_id: Option<u64>,
}

impl Session {
    /// Resolve the session from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        let value = |name: &str| {
            jar.get(name)
                .map(|cookie| cookie.value().trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            access_token: value(ACCESS_TOKEN_COOKIE),
            refresh_token: value(REFRESH_TOKEN_COOKIE),
            athlete_id: value(ATHLETE_ID_COOKIE).and_then(|id| id.parse().ok()),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn athlete_id(&self) -> Option<u64> {
        self.athlete_id
    }

    /// The access token, or `401 Authentication required`.
    pub fn require_access_token(&self) -> Result<&str, AppError> {
        self.access_token().ok_or(AppError::Unauthorized)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.is_some())
            .field("refresh_token", &self.refresh_token.is_some())
            .field("athlete_id", &self.athlete_id)
            .finish()
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session gate resolves the session up front for every request
        Ok(parts
            .extensions
            .get::<Session>()
            .cloned()
            .unwrap_or_else(|| Session::from_headers(&parts.headers)))
    }
}

/// Site-wide, server-only session cookie.
fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookies for a freshly exchanged token bundle.
///
/// The access token lives as long as Strava says it does. The refresh
/// token (only when Strava sent one) and athlete id live 30 days.
pub fn session_cookies(bundle: &TokenBundle, secure: bool) -> Vec<Cookie<'static>> {
    let mut cookies = Vec::with_capacity(3);

    let mut access = session_cookie(ACCESS_TOKEN_COOKIE, bundle.access_token.clone(), secure);
    access.set_max_age(time::Duration::seconds(bundle.expires_in));
    cookies.push(access);

    if let Some(refresh_token) = &bundle.refresh_token {
        let mut refresh = session_cookie(REFRESH_TOKEN_COOKIE, refresh_token.clone(), secure);
        refresh.set_max_age(time::Duration::seconds(LONG_LIVED_COOKIE_SECS));
        cookies.push(refresh);
    }

    let mut athlete = session_cookie(ATHLETE_ID_COOKIE, bundle.athlete_id.to_string(), secure);
    athlete.set_max_age(time::Duration::seconds(LONG_LIVED_COOKIE_SECS));
    cookies.push(athlete);

    cookies
}

/// Add all session cookies to a jar.
pub fn set_session_cookies(jar: CookieJar, bundle: &TokenBundle, secure: bool) -> CookieJar {
    session_cookies(bundle, secure)
        .into_iter()
        .fold(jar, |jar, cookie| jar.add(cookie))
}

/// Emit removal cookies for all three session cookies.
///
/// Removal cookies carry the same attributes as the originals and are sent
/// whether or not the request had the cookie, so clearing is idempotent.
pub fn clear_session_cookies(jar: CookieJar, secure: bool) -> CookieJar {
    [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, ATHLETE_ID_COOKIE]
        .into_iter()
        .fold(jar, |jar, name| {
            let mut cookie = session_cookie(name, String::new(), secure);
            cookie.make_removal();
            jar.add(cookie)
        })
}
