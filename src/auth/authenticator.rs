//! Authenticator implementation
//!
//! Exchanges the key/secret pair for a bearer token and refreshes it lazily.

use super::types::{Credentials, Token, TokenGrant, TokenState};
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, API_VERSION_PREFIX};
use crate::models::decode_first;
use chrono::Utc;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Path of the token endpoint, below the versioned API prefix
const TOKEN_PATH: &str = "/oauth2/token";

/// Owns the credentials and the current bearer token
pub struct Authenticator {
    /// Base address of the service
    api_url: String,
    /// Key/secret pair
    credentials: Credentials,
    /// Current token, `None` before the first authentication
    token: RwLock<Option<Token>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl Authenticator {
    /// Create a new authenticator for the service at `api_url`.
    ///
    /// Token requests use the default timeout and user agent.
    pub fn new(api_url: impl Into<String>, credentials: Credentials) -> Self {
        let http_client = HttpClientConfig::default()
            .build_client()
            .unwrap_or_default();
        Self::with_client(api_url, credentials, http_client)
    }

    /// Create an authenticator with a custom HTTP client.
    ///
    /// The client's timeout and user agent apply to token requests.
    pub fn with_client(
        api_url: impl Into<String>,
        credentials: Credentials,
        http_client: Client,
    ) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credentials,
            token: RwLock::new(None),
            http_client,
        }
    }

    /// The configured base address
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Exchange the credentials for a new token.
    ///
    /// On failure the previously stored token, if any, is left in place.
    pub async fn authenticate(&self) -> Result<()> {
        let mut slot = self.token.write().await;
        let token = self.fetch_token().await?;
        *slot = Some(token);
        Ok(())
    }

    /// Get a valid token value, authenticating first if needed
    pub async fn token(&self) -> Result<String> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.value.clone());
                }
            }
        }

        let mut slot = self.token.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(token) = slot.as_ref() {
            if !token.is_expired() {
                return Ok(token.value.clone());
            }
        }

        debug!("No valid token held, authenticating");
        let token = self.fetch_token().await?;
        let expired = token.is_expired();
        let value = token.value.clone();
        *slot = Some(token);

        if expired {
            return Err(Error::authentication(
                "Service issued a token that is already expired",
            ));
        }
        Ok(value)
    }

    /// Lifecycle state of the stored token
    pub async fn state(&self) -> TokenState {
        let cached = self.token.read().await;
        TokenState::of(cached.as_ref(), Utc::now())
    }

    /// The stored token, expired or not
    pub async fn current_token(&self) -> Option<Token> {
        self.token.read().await.clone()
    }

    /// Forget the stored token so the next call re-authenticates
    pub async fn clear(&self) {
        let mut slot = self.token.write().await;
        *slot = None;
    }

    /// Request a token from the service
    async fn fetch_token(&self) -> Result<Token> {
        let url = format!("{}{API_VERSION_PREFIX}{TOKEN_PATH}", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&self.credentials.token_request())
            .send()
            .await
            .map_err(|e| Error::authentication_caused_by("Token request failed", e.into()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::authentication_caused_by("Token request failed", e.into()))?;

        let Ok(envelope) = Envelope::parse(&body) else {
            warn!(status = status.as_u16(), "Token endpoint returned a non-envelope body");
            return Err(Error::authentication_caused_by(
                "Invalid response from API.",
                Error::transport_with_body(format!("HTTP {status}"), body),
            ));
        };

        if !envelope.is_ok() {
            warn!(
                status = status.as_u16(),
                success = envelope.success,
                status_code = envelope.status_code,
                "Token request was rejected"
            );
            return Err(Error::authentication_caused_by(
                "Invalid response from API.",
                envelope.into_error("oauth2-token"),
            ));
        }

        if !status.is_success() {
            return Err(Error::authentication_caused_by(
                "Invalid response from API.",
                Error::transport_with_body(format!("HTTP {status}"), body),
            ));
        }

        let grant: TokenGrant = decode_first(envelope.data, "token grant")
            .map_err(|e| Error::authentication_caused_by("Invalid response from API.", e))?;

        let token = Token::from_epoch(grant.token, grant.expires_at).ok_or_else(|| {
            Error::authentication(format!(
                "Token expiry {} is out of range",
                grant.expires_at
            ))
        })?;

        info!(expires_at = %token.expires_at, "Authenticated with OpsInsights API");
        Ok(token)
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("api_url", &self.api_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
