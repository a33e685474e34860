// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava read proxies for the signed-in athlete.
//!
//! Upstream payloads are passed through as JSON. Upstream failures keep
//! their status and error body.

use crate::error::{AppError, Result};
use crate::middleware::Session;
use crate::services::ActivityPage;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/strava/athlete", get(get_athlete))
        .route("/api/strava/athlete/activities", get(get_activities))
        .route("/api/strava/athlete/stats", get(get_stats))
}

/// Get the authenticated athlete profile.
async fn get_athlete(State(state): State<Arc<AppState>>, session: Session) -> Result<Json<Value>> {
    let token = session.require_access_token()?;
    let athlete = state.strava.get_athlete(token).await?;
    Ok(Json(athlete))
}

/// List recent activities, optionally paged.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(page): Query<ActivityPage>,
) -> Result<Json<Value>> {
    let token = session.require_access_token()?;
    let activities = state.strava.list_activities(token, page).await?;
    Ok(Json(activities))
}

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    athlete_id: Option<u64>,
}

/// Get totals for an athlete. Defaults to the signed-in athlete.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(params): Query<StatsParams>,
) -> Result<Json<Value>> {
    let token = session.require_access_token()?;
    let athlete_id = params
        .athlete_id
        .or(session.athlete_id())
        .ok_or_else(|| AppError::BadRequest("Athlete ID is required".to_string()))?;

    let stats = state.strava.get_athlete_stats(token, athlete_id).await?;
    Ok(Json(stats))
}
