// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Roast request model and the builder that assembles it from Strava snapshots.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use super::{null_as_default, AthleteStats, RunStats, StravaActivity, StravaAthlete};

/// Generation mode. Anything other than `"motivate"` is a roast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastMode {
    #[default]
    Roast,
    Motivate,
}

impl<'de> Deserialize<'de> for RoastMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)?.as_str() {
            Some("motivate") => RoastMode::Motivate,
            _ => RoastMode::Roast,
        })
    }
}

/// Output language. Anything other than `"id"` is English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Bahasa Indonesia
    Id,
    #[default]
    En,
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)?.as_str() {
            Some("id") => Language::Id,
            _ => Language::En,
        })
    }
}

/// Integral JSON numbers become an intensity; anything else selects the
/// default tone.
fn intensity_or_default<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|level| level.fract() == 0.0 && level.abs() <= i32::MAX as f64)
            .map(|level| level as i64)
    }))
}

/// User-chosen generation options.
///
/// Out-of-range intensities are accepted here; the prompt compiler maps
/// them to the mode's default tone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoastOptions {
    #[serde(rename = "type", default)]
    pub mode: RoastMode,
    /// Tone strength. `None` selects the mode's default tone.
    #[serde(default, deserialize_with = "intensity_or_default")]
    pub intensity: Option<i64>,
    #[serde(default)]
    pub language: Language,
}

/// Profile fields the prompt talks about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoastAthlete {
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
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(default)]
    pub ftp: Option<f64>,
}

impl From<&StravaAthlete> for RoastAthlete {
    fn from(athlete: &StravaAthlete) -> Self {
        Self {
            username: athlete.username.clone(),
            firstname: athlete.firstname.clone(),
            lastname: athlete.lastname.clone(),
            city: athlete.city.clone(),
            state: athlete.state.clone(),
            country: athlete.country.clone(),
            follower_count: athlete.follower_count,
            friend_count: athlete.friend_count,
            weight: athlete.weight,
            ftp: athlete.ftp,
        }
    }
}

/// Per-activity fields the prompt talks about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoastActivity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: String,
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

impl From<&StravaActivity> for RoastActivity {
    fn from(activity: &StravaActivity) -> Self {
        Self {
            name: activity.name.clone(),
            distance: activity.distance,
            moving_time: activity.moving_time,
            total_elevation_gain: activity.total_elevation_gain,
            activity_type: activity.activity_type.clone(),
            average_speed: activity.average_speed,
            max_speed: activity.max_speed,
            average_heartrate: activity.average_heartrate,
            max_heartrate: activity.max_heartrate,
            suffer_score: activity.suffer_score,
        }
    }
}

/// Everything the prompt compiler needs for one generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RoastRequest {
    #[serde(flatten)]
    pub options: RoastOptions,
    #[serde(default)]
    pub athlete: RoastAthlete,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub activities: Vec<RoastActivity>,
    #[serde(default)]
    pub stats: RunStats,
}

impl RoastRequest {
    /// Assemble a request from the three Strava snapshots.
    pub fn build(
        options: RoastOptions,
        athlete: &StravaAthlete,
        activities: &[StravaActivity],
        stats: &AthleteStats,
    ) -> Self {
        Self {
            options,
            athlete: RoastAthlete::from(athlete),
            activities: activities.iter().map(RoastActivity::from).collect(),
            stats: RunStats::from(stats),
        }
    }
}
