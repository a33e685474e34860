// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod roast;
pub mod stats;
pub mod token;

pub use activity::StravaActivity;
pub use athlete::StravaAthlete;
pub use roast::{Language, RoastActivity, RoastAthlete, RoastMode, RoastOptions, RoastRequest};
pub use stats::{format_km, AthleteStats, RunStats, RunTotals};
pub use token::{TokenBundle, TokenBundleError, TokenExchangeResponse};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
