//! Tests for the output module

use super::*;
use crate::api::resources;
use crate::models::{decode_all, decode_first, decode_records, ApiEndpoint, ClientInfo};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_render_records_with_fallbacks() {
    let records = decode_records(vec![json!({
        "file_id": 492_524,
        "file_number": "F-1",
        "close_date": null,
        "escrow_officer": "Pat"
    })])
    .unwrap();

    let expected = "\
File Information
================
Record 1 of 1
  File Id: 492524
  File Number: F-1
  Property Address: N/A
  File Status: N/A
  Open Date: N/A
  Close Date: N/A
  Escrow Officer: Pat
----------------------------------------
";
    assert_eq!(render_records(&resources::FILE_BY_ID, &records), expected);
}

#[test]
fn test_render_records_empty() {
    let text = render_records(&resources::POLICY_INFO, &[]);
    assert_eq!(text, "Policies Issued\n===============\nNo records returned.\n");
}

#[test]
fn test_render_records_counts() {
    let records = decode_records(vec![json!({"buyer_id": 1}), json!({"buyer_id": 2})]).unwrap();
    let text = render_records(&resources::BUYER_INFO, &records);

    assert!(text.contains("Record 1 of 2"));
    assert!(text.contains("Record 2 of 2"));
    assert!(text.contains("  Buyer Id: 2\n"));
    assert!(text.contains("  Email: N/A\n"));
}

#[test]
fn test_render_nested_values_as_json() {
    let records =
        decode_records(vec![json!({"settlement_agent": {"name": "Jane"}, "sales_price": ""})])
            .unwrap();
    let text = render_records(&resources::SETTLEMENT_INFO, &records);

    assert!(text.contains(r#"  Settlement Agent: {"name":"Jane"}"#));
    assert!(text.contains("  Sales Price: N/A\n"));
}

#[test]
fn test_render_client_info() {
    let info: ClientInfo = decode_first(
        vec![json!({
            "your_client_id": "42",
            "client_name": "Acme",
            "api_keys": [{"key": "abc"}],
            "api_connectors": [{"connector_id": "9", "connector_name": "RamQuest"}]
        })],
        "client info",
    )
    .unwrap();

    let expected = "\
Client Name: Acme
Client ID: 42
API Keys: 1
Available Connectors:
  - Connector ID: 9
    Connector Name: RamQuest
";
    assert_eq!(render_client_info(&info), expected);
}

#[test]
fn test_render_client_info_without_connectors() {
    let info: ClientInfo = decode_first(
        vec![json!({"your_client_id": "42", "client_name": "Acme"})],
        "client info",
    )
    .unwrap();

    assert!(render_client_info(&info).ends_with("Available Connectors: N/A\n"));
}

#[test]
fn test_render_endpoints() {
    let endpoints: Vec<ApiEndpoint> = decode_all(
        vec![json!({
            "api_version": "v1",
            "http_verb_name": "GET",
            "endpoint_name": "Client Info"
        })],
        "endpoint",
    )
    .unwrap();

    let expected = "\
Available API Endpoints:

API Version: v1
HTTP Verb: GET
Endpoint Name: Client Info
Description: N/A
Documentation: N/A
----------------------------------------
";
    assert_eq!(render_endpoints(&endpoints), expected);
}
