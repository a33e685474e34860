// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity summary model.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Summary activity from `GET /athlete/activities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StravaActivity {
    #[serde(default)]
    pub id: u64,
    /// Activity name/title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Distance in meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Elapsed time in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub elapsed_time: u64,
    /// Elevation gain in meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Free-form activity type label (Run, Ride, Walk, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    /// Meters per second
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_speed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_speed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_heartrate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_heartrate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suffer_score: f64,
}
