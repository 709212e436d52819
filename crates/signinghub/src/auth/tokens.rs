//! Token types for SigningHub authentication.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// An access token for authenticated API requests.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when constructing authorization headers or persisting a session.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `Authorization: Bearer` header value, marked sensitive.
    pub(crate) fn bearer_header(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0)).map_err(|e| {
            InvalidInputError::Header {
                name: "authorization".to_string(),
                reason: e.to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token for obtaining new access tokens.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// An access token together with the instant it was issued and its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: AccessToken,
    issued_at: DateTime<Utc>,
    lifetime: TimeDelta,
}

impl IssuedToken {
    pub fn new(token: AccessToken, issued_at: DateTime<Utc>, lifetime: TimeDelta) -> Self {
        Self {
            token,
            issued_at,
            lifetime,
        }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn lifetime(&self) -> TimeDelta {
        self.lifetime
    }

    /// Saturates at `DateTime::<Utc>::MAX_UTC` for lifetimes past the
    /// representable range.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at
            .checked_add_signed(self.lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Expired once `now` is strictly past issued-at + lifetime.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at()
    }
}

/// Serializable token state, for persisting a session between processes.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<TokenSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Serializable form of an [`IssuedToken`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

impl From<&IssuedToken> for TokenSnapshot {
    fn from(issued: &IssuedToken) -> Self {
        Self {
            token: issued.token.as_str().to_string(),
            issued_at: issued.issued_at,
            expires_in: issued.lifetime.num_seconds(),
        }
    }
}

impl TryFrom<TokenSnapshot> for IssuedToken {
    type Error = Error;

    fn try_from(snapshot: TokenSnapshot) -> Result<Self, Self::Error> {
        Ok(IssuedToken::new(
            AccessToken::new(snapshot.token),
            snapshot.issued_at,
            lifetime_from_secs(snapshot.expires_in)?,
        ))
    }
}

/// Convert an `expires_in` value into a lifetime.
pub(crate) fn lifetime_from_secs(secs: i64) -> Result<TimeDelta, Error> {
    TimeDelta::try_seconds(secs).ok_or_else(|| Error::Decode {
        message: "expires_in out of range".to_string(),
    })
}

impl fmt::Debug for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSnapshot")
            .field("access_token", &self.access_token)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl fmt::Debug for TokenSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSnapshot")
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
