// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod gemini;
pub mod prompt;
pub mod session_validator;
pub mod strava;

pub use gemini::{GeminiClient, GenerationError};
pub use session_validator::SessionValidator;
pub use strava::{ActivityPage, AthleteSnapshot, StravaClient};
