//! Session gate checked before a run.
//!
//! Credentials and second-factor verification happen elsewhere; the pipeline
//! only needs to know whether the resulting session is still valid.

use chrono::{DateTime, Duration, Utc};

use crate::error::{AuthError, FinstatError, Result};

/// Length of an access token.
pub const TOKEN_LEN: usize = 16;

/// An authenticated application session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Session for `access_token` that expires at `expires_at`.
    pub fn new(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    /// Session for `access_token` valid for `ttl_secs` seconds from now.
    ///
    /// Fails when the lifetime does not fit a timestamp.
    pub fn issue(access_token: impl Into<String>, ttl_secs: i64) -> Result<Self> {
        let expires_at = Duration::try_seconds(ttl_secs)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| {
                FinstatError::Config(format!(
                    "session lifetime of {} seconds is out of range",
                    ttl_secs
                ))
            })?;

        Ok(Self::new(access_token, expires_at))
    }

    /// Valid when the token is well formed and the session has not expired.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        is_well_formed_token(&self.access_token) && now < self.expires_at
    }
}

/// Tokens are 16 lowercase ASCII letters or digits.
pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == TOKEN_LEN
        && token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Check the session gate.
pub fn authorize(session: Option<&Session>) -> std::result::Result<(), AuthError> {
    match session {
        None => Err(AuthError::Missing),
        Some(session) if !session.is_valid() => Err(AuthError::Invalid),
        Some(_) => Ok(()),
    }
}
