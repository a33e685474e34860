//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup. Upstream base URLs are configurable
//! so tests can point the service at local stub servers.

use std::env;

/// Default Strava REST API base.
pub const DEFAULT_STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";
/// Default Strava OAuth base (token exchange and authorize page).
pub const DEFAULT_STRAVA_OAUTH_BASE: &str = "https://www.strava.com/oauth";
/// Default Gemini REST API base.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Gemini model used for generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Strava OAuth ---
    /// Strava OAuth client ID (public)
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    pub strava_api_base: String,
    pub strava_oauth_base: String,

    // --- Generation backend ---
    /// Gemini API key. Empty means generation is not configured.
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,

    // --- Server ---
    /// Public base URL of this service (used for the OAuth redirect URI)
    pub base_url: String,
    /// Server port
    pub port: u16,
    /// Production mode: secure cookies and HSTS
    pub production: bool,
    /// How long a successful token validation is trusted. Zero disables caching.
    pub session_validation_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            strava_client_id: env::var("STRAVA_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_ID"))?,
            strava_client_secret: env::var("STRAVA_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_SECRET"))?,
            strava_api_base: env_or("STRAVA_API_BASE", DEFAULT_STRAVA_API_BASE),
            strava_oauth_base: env_or("STRAVA_OAUTH_BASE", DEFAULT_STRAVA_OAUTH_BASE),

            gemini_api_key: env::var("GEMINI_API_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),

            base_url: env_or("BASE_URL", "http://localhost:3000"),
            port: parse_env("PORT", "PORT must be a port number")?.unwrap_or(3000),
            production: env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
            session_validation_ttl_secs: parse_env(
                "SESSION_VALIDATION_TTL_SECS",
                "SESSION_VALIDATION_TTL_SECS must be a number of seconds",
            )?
            .unwrap_or(0),
        })
    }

    /// Deterministic configuration for tests.
    pub fn test_default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_api_base: DEFAULT_STRAVA_API_BASE.to_string(),
            strava_oauth_base: DEFAULT_STRAVA_OAUTH_BASE.to_string(),
            gemini_api_key: "test_gemini_key".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            base_url: "http://localhost:3000".to_string(),
            port: 3000,
            production: false,
            session_validation_ttl_secs: 0,
        }
    }

    /// OAuth redirect URI registered with Strava.
    pub fn oauth_callback_url(&self) -> String {
        format!(
            "{}/api/auth/strava/callback",
            self.base_url.trim_end_matches('/')
        )
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T: std::str::FromStr>(
    name: &'static str,
    message: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(message)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}
