//! HTTP dispatch
//!
//! Every call goes through [`HttpClient::request`], which:
//! - prefixes the path with the API version segment
//! - attaches a fresh bearer token from the authenticator
//! - maps failures to structured errors
//! - parses the response envelope

use crate::auth::Authenticator;
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::types::Method;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Version segment placed in front of every resource path
pub const API_VERSION_PREFIX: &str = "/api/v1";

/// Client signature sent as the `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = "OpsInsights-API-Client";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Build a `reqwest` client with this timeout and user agent
    pub fn build_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?)
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Authenticated JSON client for the versioned API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    base_url: String,
    authenticator: Arc<Authenticator>,
}

impl HttpClient {
    /// Create a client for the authenticator's service with default configuration
    pub fn new(authenticator: Arc<Authenticator>) -> Result<Self> {
        Self::with_config(authenticator, HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(authenticator: Arc<Authenticator>, config: HttpClientConfig) -> Result<Self> {
        let base_url = authenticator.api_url().trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let client = config.build_client()?;

        Ok(Self {
            client,
            config,
            base_url,
            authenticator,
        })
    }

    /// The authenticator supplying bearer tokens
    pub fn authenticator(&self) -> &Arc<Authenticator> {
        &self.authenticator
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Envelope> {
        self.request(Method::GET, path, None).await
    }

    /// Make a POST request with a raw JSON body
    pub async fn post(&self, path: &str, body: &Value) -> Result<Envelope> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Issue a request and parse the response envelope.
    ///
    /// The envelope is returned as-is; checking `success` and `status_code`
    /// is left to the caller.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope> {
        let url = self.build_url(path);
        let token = self.authenticator.token().await?;

        let mut req = self
            .client
            .request(method.into(), &url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json");

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        debug!(%method, %url, "Dispatching request");

        let response = req.send().await.map_err(|e| Error::Transport {
            message: format!("{method} {url}: {e}"),
            body: None,
            source: Some(e),
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Some(record) = Envelope::parse(&text)
                .ok()
                .and_then(|envelope| envelope.error_record())
            {
                warn!(
                    %method,
                    %url,
                    status = status.as_u16(),
                    code = %record.code,
                    "Service returned an error record"
                );
                return Err(Error::Api(record));
            }

            warn!(%method, %url, status = status.as_u16(), "Request failed");
            return Err(Error::transport_with_body(
                format!("{method} {url} returned HTTP {status}"),
                text,
            ));
        }

        Envelope::parse(&text)
            .map_err(|e| Error::transport_with_body(format!("{method} {url}: {e}"), text))
    }

    /// Build the full URL for a resource path
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{API_VERSION_PREFIX}/{path}", self.base_url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
