//! Response envelope
//!
//! Every response from the service is wrapped as
//! `{ "success": bool, "status_code": int, "data": [...] }`.
//! On failure `data[0]` holds an error record.

use crate::error::{Error, Result};
use crate::models::string_or_number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform wrapper around every response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the service considers the call successful
    pub success: bool,
    /// Status code reported inside the body
    pub status_code: u16,
    /// Resource objects, or a single error record on failure
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Structured error record returned in `data[0]` of a failure envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Service error code (numeric codes are kept as their decimal text)
    #[serde(default, deserialize_with = "string_or_number")]
    pub code: String,
    /// Symbolic error name
    #[serde(default)]
    pub name: String,
    /// Human readable message
    pub message: String,
    /// Suggested resolution for the caller
    #[serde(default)]
    pub resolution: String,
}

impl Envelope {
    /// Parse an envelope from a raw response body
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::decode(format!("Invalid envelope: {e}")))
    }

    /// True when `success` is set and the embedded status is 200
    pub fn is_ok(&self) -> bool {
        self.success && self.status_code == 200
    }

    /// The populated error record at `data[0]`, if any
    pub fn error_record(&self) -> Option<ErrorRecord> {
        let first = self.data.first()?;
        serde_json::from_value(first.clone()).ok()
    }

    /// Unwrap the data of a successful envelope.
    ///
    /// Failure envelopes become [`Error::Api`] when a structured record is
    /// present and [`Error::UnexpectedResponse`] naming `resource` otherwise.
    pub fn into_data(self, resource: &str) -> Result<Vec<Value>> {
        if self.is_ok() {
            return Ok(self.data);
        }

        Err(self.into_error(resource))
    }

    /// Convert a failure envelope into the matching error
    pub fn into_error(self, resource: &str) -> Error {
        match self.error_record() {
            Some(record) => Error::Api(record),
            None => Error::UnexpectedResponse {
                resource: resource.to_string(),
                success: self.success,
                status_code: self.status_code,
            },
        }
    }
}
