// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Upstream Strava failure. `status` is `None` when no response arrived.
    #[error("Strava API error: {detail}")]
    StravaApi {
        status: Option<StatusCode>,
        detail: serde_json::Value,
    },

    #[error("Failed to generate content: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Strava transport failure (no HTTP response).
    pub fn strava_transport(err: impl std::fmt::Display) -> Self {
        AppError::StravaApi {
            status: None,
            detail: serde_json::Value::String(err.to_string()),
        }
    }

    /// True when Strava rejected the access token itself.
    pub fn is_strava_token_error(&self) -> bool {
        matches!(
            self,
            AppError::StravaApi {
                status: Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN),
                ..
            }
        )
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".into(),
                None,
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.into(), None),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".into(),
                serde_json::to_value(&errors).ok(),
            ),
            AppError::StravaApi { status, detail } => {
                tracing::warn!(status = ?status, detail = %detail, "Strava API error");
                (
                    status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    detail,
                    None,
                )
            }
            AppError::Generation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate content".into(),
                Some(msg.into()),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                    None,
                )
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
