// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roastrava API Server
//!
//! Connects to Strava and asks Gemini to roast (or motivate) the athlete
//! based on their recent activities.

use anyhow::Context;
use roastrava::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        production = config.production,
        base_url = %config.base_url,
        "Starting Roastrava API"
    );

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, roast generation will fail");
    }
    if config.session_validation_ttl_secs > 0 {
        tracing::info!(
            ttl_secs = config.session_validation_ttl_secs,
            "Session validation cache enabled"
        );
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config).context("Failed to build application state")?);
    tracing::info!(model = %state.gemini.model(), "Upstream clients initialized");

    // Build router
    let app = roastrava::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,roastrava=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
