//! CLI module
//!
//! Command-line interface for the OpsInsights API.
//!
//! # Commands
//!
//! - `me` - Show your client account and connectors
//! - `endpoints` - List the endpoint catalog
//! - `file-by-address`, `file`, `lender-file` - File lookups
//! - `partners`, `buyer`, `seller`, `property`, ... - File details
//! - `referral-agent`, `referral-agent-sales` - Custom reports

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
