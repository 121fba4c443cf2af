// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # OpsInsights API Client
//!
//! Client library for the OpsInsights title and escrow service.
//!
//! ## Features
//!
//! - **Token Authentication**: Key/secret exchange with cached, self-refreshing bearer tokens
//! - **Envelope Unwrapping**: Every response is checked for `success` and status 200
//! - **Resource Table**: File, party, settlement, policy and referral lookups from one engine
//! - **Verbatim Errors**: Service error records surface with code, name, message and resolution
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opsinsights_client::{ApiClient, Authenticator, Credentials, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let auth = Arc::new(Authenticator::new(
//!         "https://app.opsinsights.com",
//!         Credentials::new("my-key", "my-secret"),
//!     ));
//!     auth.authenticate().await?;
//!
//!     let mut client = ApiClient::new(auth)?;
//!     let me = client.my_client_info().await?;
//!     let connector = me.first_connector_id().unwrap_or_default().to_string();
//!
//!     let files = client
//!         .file_lookup_by_address("123 Main Street, Columbia, SC", &me.client_id, &connector)
//!         .await?;
//!     opsinsights_client::output::print_records(&opsinsights_client::api::resources::FILE_BY_ADDRESS, &files);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        ApiClient                         │
//! │  my_client_info()  file_lookup_*()  settlement_*()  ...  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!        ┌──────────┬──────────┴─────┬───────────┬──────────┐
//!        │ Resource │   Template     │ Envelope  │  Models  │
//!        │  table   │  {{ var }}     │ unwrap    │  Record  │
//!        └──────────┴────────────────┴───────────┴──────────┘
//!                              │
//!        ┌─────────────────────┴────────────────────────────┐
//!        │  HttpClient (bearer, Accept, User-Agent)         │
//!        │  Authenticator (token cache, refresh on expiry)  │
//!        └──────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Response envelope and error records
pub mod envelope;

/// Typed views of returned data
pub mod models;

/// Path template rendering
pub mod template;

/// Token authentication
pub mod auth;

/// Authenticated HTTP transport
pub mod http;

/// Resource table and API client
pub mod api;

/// Console printers
pub mod output;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{ApiClient, Resource, SessionIds};
pub use auth::{Authenticator, Credentials, Token, TokenState};
pub use config::ClientConfig;
pub use envelope::{Envelope, ErrorRecord};
pub use models::{ApiConnector, ApiEndpoint, ClientInfo, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
