//! Client configuration
//!
//! Settings for the command-line front end, loaded from a JSON file and
//! overridden by flags. The library itself takes its settings
//! programmatically.

use crate::auth::{Authenticator, Credentials};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Connection settings for the service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base address, e.g. `https://app.opsinsights.com`
    #[serde(default)]
    pub api_url: String,

    /// API key
    #[serde(default)]
    pub key: String,

    /// API secret
    #[serde(default, skip_serializing)]
    pub secret: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            key: String::new(),
            secret: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides; `None` keeps the current value
    #[must_use]
    pub fn merge(
        mut self,
        api_url: Option<String>,
        key: Option<String>,
        secret: Option<String>,
    ) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(key) = key {
            self.key = key;
        }
        if let Some(secret) = secret {
            self.secret = secret;
        }
        self
    }

    /// Check that every required field is present and the URL parses
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("api_url", &self.api_url),
            ("key", &self.key),
            ("secret", &self.secret),
        ] {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }
        url::Url::parse(&self.api_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Build an authenticator from these settings.
    ///
    /// Token requests use the same timeout and user agent as resource requests.
    pub fn authenticator(&self) -> Result<Authenticator> {
        Ok(Authenticator::with_client(
            self.api_url.clone(),
            Credentials::new(self.key.clone(), self.secret.clone()),
            self.http_config().build_client()?,
        ))
    }

    /// Transport settings for the API client
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()
    }
}
