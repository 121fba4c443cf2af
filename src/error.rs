//! Error types for the OpsInsights client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::envelope::ErrorRecord;
use thiserror::Error;

/// The main error type for the OpsInsights client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Authentication {
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("API error {}: {} ({})", .0.code, .0.message, .0.name)]
    Api(ErrorRecord),

    #[error("Request for '{resource}' was not successful (success: {success}, status_code: {status_code})")]
    UnexpectedResponse {
        resource: String,
        success: bool,
        status_code: u16,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Request failed: {message}")]
    Transport {
        message: String,
        body: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Path Errors
    // ============================================================================
    #[error("Invalid value for path parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an authentication error without an underlying cause
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying failure as an authentication error
    pub fn authentication_caused_by(message: impl Into<String>, cause: Error) -> Self {
        Self::Authentication {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }

    /// Create a transport error that keeps the raw response body
    pub fn transport_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            body: Some(body.into()),
            source: None,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid path parameter error
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// The structured service error, if this error carries one.
    ///
    /// Looks through authentication failures so callers can display the
    /// service's resolution text either way.
    pub fn error_record(&self) -> Option<&ErrorRecord> {
        match self {
            Error::Api(record) => Some(record),
            Error::Authentication {
                source: Some(inner),
                ..
            } => inner.error_record(),
            _ => None,
        }
    }

    /// Raw response body attached to a transport failure
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Transport { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
            body: None,
            source: Some(err),
        }
    }
}

/// Result type alias for the OpsInsights client
pub type Result<T> = std::result::Result<T, Error>;
