//! HTTP client module
//!
//! The single dispatch primitive every accessor goes through. Requests are
//! sent under `/api/v1` with a bearer token fetched from the authenticator
//! on every call. Failed requests are not retried.

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, API_VERSION_PREFIX, DEFAULT_USER_AGENT,
};

#[cfg(test)]
mod tests;
