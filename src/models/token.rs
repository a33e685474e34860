// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OAuth token bundle returned by the Strava token exchange.

use serde::Deserialize;

/// Access token lifetime used when Strava omits `expires_in` (6 hours).
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 6 * 60 * 60;

/// Raw token exchange response (`POST /oauth/token`).
///
/// Every field is optional on the wire; [`TokenBundle::try_from`] decides
/// whether the response amounts to a usable session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenExchangeResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub athlete: Option<TokenAthlete>,
}

/// Athlete summary embedded in the token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenAthlete {
    pub id: u64,
}

/// An authenticated session, as handed to the cookie layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub athlete_id: u64,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Why a token exchange response cannot become a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenBundleError {
    #[error("token response did not include an access token")]
    MissingAccessToken,
    #[error("token response did not include the athlete")]
    MissingAthlete,
}

impl TryFrom<TokenExchangeResponse> for TokenBundle {
    type Error = TokenBundleError;

    fn try_from(response: TokenExchangeResponse) -> Result<Self, Self::Error> {
        let access_token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(TokenBundleError::MissingAccessToken)?;
        let athlete_id = response
            .athlete
            .map(|a| a.id)
            .ok_or(TokenBundleError::MissingAthlete)?;
        let expires_in = response
            .expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS);

        Ok(Self {
            access_token,
            refresh_token: response.refresh_token.filter(|t| !t.is_empty()),
            athlete_id,
            expires_in,
        })
    }
}
