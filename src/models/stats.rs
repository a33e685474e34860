//! Run totals from `GET /athletes/{id}/stats`.
//!
//! Strava reports totals per sport over three windows. Only the run
//! totals for the recent window (last four weeks) and year-to-date feed
//! the prompt; the all-time block is kept for the proxy route.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Aggregate totals for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTotals {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    /// Meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elapsed_time: u64,
    /// Meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub elevation_gain: f64,
}

impl RunTotals {
    /// Distance in kilometers rendered with one decimal place.
    pub fn distance_km(&self) -> String {
        format_km(self.distance)
    }
}

/// Athlete statistics snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteStats {
    #[serde(default)]
    pub recent_run_totals: RunTotals,
    #[serde(default)]
    pub ytd_run_totals: RunTotals,
    #[serde(default)]
    pub all_run_totals: RunTotals,
}

/// The two run periods carried into a roast request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub recent_run_totals: RunTotals,
    #[serde(default)]
    pub ytd_run_totals: RunTotals,
}

impl From<&AthleteStats> for RunStats {
    fn from(stats: &AthleteStats) -> Self {
        Self {
            recent_run_totals: stats.recent_run_totals.clone(),
            ytd_run_totals: stats.ytd_run_totals.clone(),
        }
    }
}

/// Format meters as kilometers with exactly one decimal digit.
///
/// Rounds the binary value of `meters / 1000` to the nearest tenth, so
/// 12350 m (12.3499...) is "12.3". Only exact ties, which are odd
/// multiples of 0.25, round away from zero.
pub fn format_km(meters: f64) -> String {
    let km = meters / 1000.0;

    // Scaling by 4 is exact, so this detects true ties only
    let quarters = km.abs() * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (quarters * 2.5).ceil();
        let sign = if km < 0.0 { "-" } else { "" };
        return format!("{}{:.1}", sign, tenths / 10.0);
    }

    format!("{:.1}", km)
}
