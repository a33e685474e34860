// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token validation for the session gate.
//!
//! By default every call goes to Strava. With a positive TTL, successful
//! validations are remembered in-process until the TTL lapses. Failures
//! and logouts evict the entry immediately, so a revoked token is never
//! trusted past the next failed check.

use crate::error::AppError;
use crate::services::StravaClient;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Upper bound on how long a validation may be trusted.
const MAX_VALIDATION_TTL_SECS: u64 = 24 * 60 * 60;

/// Cache key: hex SHA-256 of the token, so raw tokens are not held in memory.
fn cache_key(access_token: &str) -> String {
    hex::encode(Sha256::digest(access_token.as_bytes()))
}

/// Validates access tokens, optionally caching successes.
#[derive(Clone)]
pub struct SessionValidator {
    strava: StravaClient,
    ttl: Duration,
    /// Validated token hash -> trusted until.
    validated: Arc<DashMap<String, DateTime<Utc>>>,
}

impl SessionValidator {
    pub fn new(strava: StravaClient, ttl_secs: u64) -> Self {
        Self {
            strava,
            ttl: Duration::seconds(ttl_secs.min(MAX_VALIDATION_TTL_SECS) as i64),
            validated: Arc::new(DashMap::new()),
        }
    }

    fn caching(&self) -> bool {
        self.ttl > Duration::zero()
    }

    /// Validate a token. Any error means the session is not live.
    pub async fn validate(&self, access_token: &str) -> Result<(), AppError> {
        let key = self.caching().then(|| cache_key(access_token));

        if let Some(key) = &key {
            if self.is_trusted(key, Utc::now()) {
                return Ok(());
            }
        }

        match self.strava.validate_token(access_token).await {
            Ok(()) => {
                if let Some(key) = key {
                    self.remember(key, Utc::now());
                }
                Ok(())
            }
            Err(e) => {
                if let Some(key) = key {
                    self.validated.remove(&key);
                }
                Err(e)
            }
        }
    }

    /// Forget a token (logout, failed validation elsewhere).
    pub fn invalidate(&self, access_token: &str) {
        if self.caching() {
            self.validated.remove(&cache_key(access_token));
        }
    }

    /// Trust `key` for one TTL. Lapsed entries for any token are swept first,
    /// so tokens that never come back do not accumulate.
    fn remember(&self, key: String, now: DateTime<Utc>) {
        self.validated.retain(|_, until| now < *until);
        self.validated.insert(key, now + self.ttl);
    }

    fn is_trusted(&self, key: &str, now: DateTime<Utc>) -> bool {
        let trusted = self
            .validated
            .get(key)
            .map(|until| now < *until)
            .unwrap_or(false);

        if !trusted {
            self.validated.remove_if(key, |_, until| now >= *until);
        }
        trusted
    }

    #[cfg(test)]
    fn cached_entries(&self) -> usize {
        self.validated.len()
    }
}
