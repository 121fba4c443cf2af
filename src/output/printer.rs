//! Console printers
//!
//! Each `print_*` writes the text built by the matching `render_*` to
//! standard output. Absent or null fields show as `N/A`.

use crate::api::Resource;
use crate::models::{ApiEndpoint, ClientInfo, Record};

/// Placeholder for absent optional fields
pub const NOT_AVAILABLE: &str = "N/A";

const SEPARATOR: &str = "----------------------------------------";

/// Print the caller's client account and its connectors
pub fn print_client_info(info: &ClientInfo) {
    print!("{}", render_client_info(info));
}

/// Print the endpoint catalog
pub fn print_endpoints(endpoints: &[ApiEndpoint]) {
    print!("{}", render_endpoints(endpoints));
}

/// Print the records returned for a resource
pub fn print_records(resource: &Resource, records: &[Record]) {
    print!("{}", render_records(resource, records));
}

pub fn render_client_info(info: &ClientInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("Client Name: {}\n", info.client_name));
    out.push_str(&format!("Client ID: {}\n", info.client_id));
    out.push_str(&format!("API Keys: {}\n", info.api_keys.len()));

    if info.api_connectors.is_empty() {
        out.push_str(&format!("Available Connectors: {NOT_AVAILABLE}\n"));
        return out;
    }

    out.push_str("Available Connectors:\n");
    for connector in &info.api_connectors {
        out.push_str(&format!("  - Connector ID: {}\n", connector.connector_id));
        for (key, value) in &connector.extra {
            out.push_str(&format!("    {}: {}\n", label(key), display_value(Some(value))));
        }
    }
    out
}

pub fn render_endpoints(endpoints: &[ApiEndpoint]) -> String {
    let mut out = String::from("Available API Endpoints:\n\n");
    for endpoint in endpoints {
        out.push_str(&format!("API Version: {}\n", or_na(endpoint.api_version.as_deref())));
        out.push_str(&format!("HTTP Verb: {}\n", or_na(endpoint.http_verb_name.as_deref())));
        out.push_str(&format!("Endpoint Name: {}\n", endpoint.endpoint_name));
        out.push_str(&format!(
            "Description: {}\n",
            or_na(endpoint.endpoint_description.as_deref())
        ));
        out.push_str(&format!(
            "Documentation: {}\n",
            or_na(endpoint.developer_documentation_link.as_deref())
        ));
        out.push_str(&format!("{SEPARATOR}\n"));
    }
    out
}

/// Render records: declared display fields first, then everything else
pub fn render_records(resource: &Resource, records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", resource.title));
    out.push_str(&format!("{}\n", "=".repeat(resource.title.len())));

    if records.is_empty() {
        out.push_str("No records returned.\n");
        return out;
    }

    let total = records.len();
    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!("Record {} of {total}\n", index + 1));

        for field in resource.display_fields {
            out.push_str(&format!("  {}: {}\n", label(field), display_value(record.get(field))));
        }

        for field in record.field_names() {
            if resource.display_fields.contains(&field) {
                continue;
            }
            out.push_str(&format!("  {}: {}\n", label(field), display_value(record.get(field))));
        }

        out.push_str(&format!("{SEPARATOR}\n"));
    }
    out
}

/// `file_number` -> `File Number`
fn label(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_value(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => NOT_AVAILABLE.to_string(),
        Some(serde_json::Value::String(s)) if s.is_empty() => NOT_AVAILABLE.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or(NOT_AVAILABLE)
}
