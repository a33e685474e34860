// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Roastrava: AI roasts and pep talks from your Strava data
//!
//! This crate provides the web service: Strava OAuth with cookie sessions,
//! a session gate for pages, Strava read proxies, and the roast pipeline
//! that turns profile, activities and stats into a Gemini prompt.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{GeminiClient, SessionValidator, StravaClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub strava: StravaClient,
    pub gemini: GeminiClient,
    pub session_validator: SessionValidator,
}

impl AppState {
    /// Build the upstream clients for a configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let strava = StravaClient::new(&config)?;
        let gemini = GeminiClient::new(&config)?;
        let session_validator =
            SessionValidator::new(strava.clone(), config.session_validation_ttl_secs);

        Ok(Self {
            config,
            strava,
            gemini,
            session_validator,
        })
    }
}
