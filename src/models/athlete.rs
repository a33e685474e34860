// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Athlete profile as returned by Strava.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Authenticated athlete profile (`GET /athlete`).
///
/// Strava sends `null` for fields the athlete never filled in; those
/// collapse to empty strings or zero here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StravaAthlete {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub follower_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub friend_count: u64,
    /// Weight in kilograms
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    /// Functional threshold power in watts; absent for most runners
    #[serde(default)]
    pub ftp: Option<f64>,
    #[serde(default)]
    pub profile: Option<String>,
}
