// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roast generation routes.
//!
//! `POST /api/roast` takes a fully assembled request. `POST /api/roast/me`
//! assembles one from the signed-in athlete's Strava data first. Both
//! answer with the generated text as a JSON string.

use crate::error::{AppError, Result};
use crate::middleware::Session;
use crate::models::{RoastOptions, RoastRequest};
use crate::services::prompt;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/roast", post(create_roast))
        .route("/api/roast/me", post(create_roast_for_session))
}

/// Unwrap a JSON body. An unreadable body fails the generation like any
/// other error on this path: 500 with the parser message as `details`.
fn json_body<T>(body: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Unreadable roast request body");
        AppError::Generation(rejection.body_text())
    })
}

/// Generate from a client-supplied roast request.
async fn create_roast(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<RoastRequest>, JsonRejection>,
) -> Result<Json<String>> {
    let request = json_body(body)?;
    request.validate()?;

    generate(&state, &request).await.map(Json)
}

/// Generate for the signed-in athlete from live Strava data.
async fn create_roast_for_session(
    State(state): State<Arc<AppState>>,
    session: Session,
    body: std::result::Result<Json<RoastOptions>, JsonRejection>,
) -> Result<Json<String>> {
    let token = session.require_access_token()?;
    let options = json_body(body)?;

    let (athlete, activities, stats) = state
        .strava
        .fetch_snapshot(token)
        .await
        .complete()
        .inspect_err(|e| tracing::warn!(error = %e, "Strava data incomplete, not generating"))?;

    let request = RoastRequest::build(options, &athlete, &activities, &stats);
    request.validate()?;

    generate(&state, &request).await.map(Json)
}

/// Compile the prompt and run the generation call.
async fn generate(state: &AppState, request: &RoastRequest) -> Result<String> {
    let prompt = prompt::compile(request);

    tracing::info!(
        mode = ?request.options.mode,
        language = ?request.options.language,
        intensity = ?request.options.intensity,
        activities = request.activities.len(),
        "Generating roast"
    );

    state.gemini.generate(&prompt).await.map_err(|e| {
        tracing::error!(model = %state.gemini.model(), error = %e, "Generation failed");
        AppError::Generation(e.to_string())
    })
}
