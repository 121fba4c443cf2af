//! Auth types
//!
//! Credentials, the bearer token and its lifecycle state.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Auth type sent with every token request
pub const AUTH_TYPE: &str = "api_key_secret";

/// API key and secret issued by the service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    /// Create credentials from a key/secret pair
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The API key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Body of the token request
    pub(crate) fn token_request(&self) -> TokenRequest<'_> {
        TokenRequest {
            key: &self.key,
            secret: &self.secret,
            auth_type: AUTH_TYPE,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// JSON body of `POST /api/v1/oauth2/token`
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub key: &'a str,
    pub secret: &'a str,
    pub auth_type: &'a str,
}

/// `data[0]` of a successful token response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenGrant {
    pub token: String,
    /// Unix epoch seconds
    pub expires_at: i64,
}

/// Bearer token with its expiry
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// The bearer token value
    pub value: String,
    /// Instant from which the token must no longer be used
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Create a new token
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Create a token expiring N seconds from now
    pub fn expires_in(value: impl Into<String>, seconds: i64) -> Self {
        Self::new(value, Utc::now() + chrono::Duration::seconds(seconds))
    }

    /// Create a token from a Unix epoch expiry
    pub fn from_epoch(value: impl Into<String>, expires_at: i64) -> Option<Self> {
        let expires_at = Utc.timestamp_opt(expires_at, 0).single()?;
        Some(Self::new(value, expires_at))
    }

    /// Check whether the token is expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check whether the token is expired now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Lifecycle state of the authenticator's token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    /// No token has been obtained yet
    Unauthenticated,
    /// A token is held and not yet expired
    Valid,
    /// A token is held but its expiry has passed
    Expired,
}

impl TokenState {
    /// Derive the state of an optional token at `now`
    pub fn of(token: Option<&Token>, now: DateTime<Utc>) -> Self {
        match token {
            None => TokenState::Unauthenticated,
            Some(token) if token.is_expired_at(now) => TokenState::Expired,
            Some(_) => TokenState::Valid,
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_token_not_expired() {
        let token = Token::expires_in("test", 3600);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_expired() {
        let token = Token::expires_in("test", -100);
        assert!(token.is_expired());
    }

    #[test]
    fn test_token_expires_at_boundary() {
        let token = Token::from_epoch("test", 1_700_000_000).unwrap();
        let just_before = Utc.timestamp_opt(1_699_999_999, 0).unwrap();
        let boundary = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        assert!(!token.is_expired_at(just_before));
        assert!(token.is_expired_at(boundary));
    }

    #[test]
    fn test_token_state() {
        let now = Utc::now();
        assert_eq!(TokenState::of(None, now), TokenState::Unauthenticated);

        let valid = Token::new("a", now + chrono::Duration::seconds(10));
        assert_eq!(TokenState::of(Some(&valid), now), TokenState::Valid);

        let expired = Token::new("a", now);
        assert_eq!(TokenState::of(Some(&expired), now), TokenState::Expired);
    }

    #[test]
    fn test_secrets_are_redacted() {
        let credentials = Credentials::new("my-key", "super-secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("my-key"));
        assert!(!debug.contains("super-secret"));

        let token = Token::expires_in("bearer-value", 60);
        assert!(!format!("{token:?}").contains("bearer-value"));
    }

    #[test]
    fn test_token_request_body() {
        let credentials = Credentials::new("k", "s");
        let body = serde_json::to_value(credentials.token_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"key": "k", "secret": "s", "auth_type": "api_key_secret"})
        );
    }
}
