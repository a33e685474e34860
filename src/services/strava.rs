// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Authorization code exchange
//! - Token validation against the identity endpoint
//! - Athlete profile, activity and stats reads
//! - Fanning the three reads out for one roast

use crate::config::Config;
use crate::error::AppError;
use crate::models::{AthleteStats, StravaActivity, StravaAthlete, TokenBundle, TokenExchangeResponse};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout applied to every Strava call.
pub const STRAVA_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    api_base: String,
    oauth_base: String,
    client_id: String,
    client_secret: String,
}

/// Optional paging for the activity list, forwarded verbatim.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct ActivityPage {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl StravaClient {
    /// Create a new Strava client from the application config.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(STRAVA_HTTP_TIMEOUT)
            .build()
            .context("failed building Strava HTTP client")?;

        Ok(Self {
            http,
            api_base: config.strava_api_base.clone(),
            oauth_base: config.strava_oauth_base.clone(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
        })
    }

    // ─── OAuth ───────────────────────────────────────────────────────────────

    /// Exchange an authorization code for a token bundle.
    ///
    /// A response without an access token or athlete is treated as failure.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenBundle, AppError> {
        let response = self
            .http
            .post(format!("{}/token", self.oauth_base))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::strava_transport(format!("Token exchange failed: {}", e)))?;

        let token_response: TokenExchangeResponse = check_response_json(response).await?;

        TokenBundle::try_from(token_response).map_err(|e| AppError::StravaApi {
            status: None,
            detail: e.to_string().into(),
        })
    }

    /// Check an access token against the identity endpoint.
    ///
    /// Any non-success status is a failed validation; so is a transport error.
    pub async fn validate_token(&self, access_token: &str) -> Result<(), AppError> {
        let response = self
            .http
            .get(format!("{}/athlete", self.api_base))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(AppError::strava_transport)?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(AppError::StravaApi {
            status: Some(response.status()),
            detail: "token validation failed".into(),
        })
    }

    // ─── Reads ───────────────────────────────────────────────────────────────

    /// Get the authenticated athlete profile.
    pub async fn get_athlete<T: DeserializeOwned>(&self, access_token: &str) -> Result<T, AppError> {
        let url = format!("{}/athlete", self.api_base);
        self.get_json(&url, access_token, &[]).await
    }

    /// List the athlete's recent activities.
    pub async fn list_activities<T: DeserializeOwned>(
        &self,
        access_token: &str,
        page: ActivityPage,
    ) -> Result<T, AppError> {
        let url = format!("{}/athlete/activities", self.api_base);

        let mut query = Vec::new();
        if let Some(page) = page.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = page.per_page {
            query.push(("per_page", per_page.to_string()));
        }

        self.get_json(&url, access_token, &query).await
    }

    /// Get run/ride/swim totals for an athlete.
    pub async fn get_athlete_stats<T: DeserializeOwned>(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> Result<T, AppError> {
        let url = format!("{}/athletes/{}/stats", self.api_base, athlete_id);
        self.get_json(&url, access_token, &[]).await
    }

    /// Fetch profile, activities and stats for one roast.
    ///
    /// Profile and activities are fetched concurrently. Stats need the
    /// athlete id, so they follow the profile and are skipped when the
    /// profile read failed. One failing read never cancels the others.
    pub async fn fetch_snapshot(&self, access_token: &str) -> AthleteSnapshot {
        let profile_then_stats = async {
            let athlete = self.get_athlete::<StravaAthlete>(access_token).await;
            let stats = match &athlete {
                Ok(athlete) => Some(
                    self.get_athlete_stats::<AthleteStats>(access_token, athlete.id)
                        .await,
                ),
                Err(_) => None,
            };
            (athlete, stats)
        };

        let ((athlete, stats), activities) = tokio::join!(
            profile_then_stats,
            self.list_activities::<Vec<StravaActivity>>(access_token, ActivityPage::default())
        );

        AthleteSnapshot {
            athlete,
            activities,
            stats,
        }
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(AppError::strava_transport)?;

        check_response_json(response).await
    }
}

/// Check response status and parse the JSON body.
///
/// Failed responses keep the upstream status and, when it parses, the
/// upstream JSON error body so it can be proxied back to the caller.
async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 429 {
            tracing::warn!("Strava rate limit hit (429)");
        }

        let detail = serde_json::from_str(&body)
            .unwrap_or_else(|_| serde_json::Value::String(format!("HTTP {}: {}", status, body)));

        return Err(AppError::StravaApi {
            status: Some(status),
            detail,
        });
    }

    response
        .json()
        .await
        .map_err(|e| AppError::strava_transport(format!("JSON parse error: {}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// AthleteSnapshot - the three reads behind one roast
// ─────────────────────────────────────────────────────────────────────────────

/// Result of [`StravaClient::fetch_snapshot`]. Each read succeeds or fails
/// on its own; `stats` is `None` when the profile never resolved.
#[derive(Debug)]
pub struct AthleteSnapshot {
    pub athlete: Result<StravaAthlete, AppError>,
    pub activities: Result<Vec<StravaActivity>, AppError>,
    pub stats: Option<Result<AthleteStats, AppError>>,
}

impl AthleteSnapshot {
    /// All three reads, or the first failure in profile, activities, stats order.
    pub fn complete(self) -> Result<(StravaAthlete, Vec<StravaActivity>, AthleteStats), AppError> {
        let athlete = self.athlete?;
        let activities = self.activities?;
        let stats = self.stats.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("stats skipped despite a resolved profile"))
        })??;
        Ok((athlete, activities, stats))
    }
}
