//! Result structures returned by the accessors
//!
//! Known resources get explicit structs. Resources whose shape is owned by
//! the remote deployment are returned as [`Record`]s that keep every field
//! the service sent.

use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Client info
// ============================================================================

/// The caller's client account, narrowed from `data[0]` of `/clients/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client ID (sent by the service as `your_client_id`)
    #[serde(
        rename(deserialize = "your_client_id"),
        deserialize_with = "string_or_number"
    )]
    pub client_id: String,
    /// Display name of the client
    pub client_name: String,
    /// API keys issued to the client
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_keys: Vec<Value>,
    /// Connectors available to the API key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_connectors: Vec<ApiConnector>,
    /// Any further fields the service returned
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl ClientInfo {
    /// ID of the first available connector
    pub fn first_connector_id(&self) -> Option<&str> {
        self.api_connectors
            .first()
            .map(|connector| connector.connector_id.as_str())
    }
}

/// A backend data source the client can query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConnector {
    /// Connector ID used in resource paths
    #[serde(deserialize_with = "string_or_number")]
    pub connector_id: String,
    /// Any further fields the service returned
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Endpoint catalog
// ============================================================================

/// One entry of the `/helpers/api-endpoints` catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub endpoint_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_verb_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_documentation_link: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Generic record
// ============================================================================

/// A resource object exactly as the service returned it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(JsonObject);

impl Record {
    /// Decode one element of `envelope.data`
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::decode(format!(
                "Expected a JSON object in response data, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Raw field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field rendered as text; `None` when absent or null
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Field names in the order they are stored
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Underlying JSON object
    pub fn into_inner(self) -> JsonObject {
        self.0
    }
}

impl From<JsonObject> for Record {
    fn from(map: JsonObject) -> Self {
        Self(map)
    }
}

/// Decode every element of `envelope.data` as a [`Record`]
pub fn decode_records(data: Vec<Value>) -> Result<Vec<Record>> {
    data.into_iter().map(Record::from_value).collect()
}

/// Decode `data[0]` into `T`
pub fn decode_first<T: serde::de::DeserializeOwned>(data: Vec<Value>, what: &str) -> Result<T> {
    let first = data
        .into_iter()
        .next()
        .ok_or_else(|| Error::decode(format!("Response for {what} contained no data")))?;
    serde_json::from_value(first).map_err(|e| Error::decode(format!("Invalid {what}: {e}")))
}

/// Decode every element of `envelope.data` into `T`
pub fn decode_all<T: serde::de::DeserializeOwned>(data: Vec<Value>, what: &str) -> Result<Vec<T>> {
    data.into_iter()
        .map(|value| {
            serde_json::from_value(value).map_err(|e| Error::decode(format!("Invalid {what}: {e}")))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accept an identifier sent either as a JSON string or a number
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
