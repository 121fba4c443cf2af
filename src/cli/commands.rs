//! CLI commands and argument parsing

use crate::api::resources::{self, Resource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the OpsInsights API
#[derive(Parser, Debug)]
#[command(name = "opsinsights")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base address of the service
    #[arg(long, global = true, env = "OPSINSIGHTS_API_URL")]
    pub api_url: Option<String>,

    /// API key
    #[arg(long, global = true, env = "OPSINSIGHTS_KEY")]
    pub key: Option<String>,

    /// API secret
    #[arg(long, global = true, env = "OPSINSIGHTS_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Client ID (looked up with `me` when omitted)
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Connector ID (first available connector when omitted)
    #[arg(long, global = true)]
    pub connector_id: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show your client account and available connectors
    Me,

    /// List every endpoint the service offers
    Endpoints,

    /// Find files by property address
    FileByAddress { address: String },

    /// Look a file up by file ID
    File { file_id: String },

    /// Find files by lender loan number
    LenderFile { loan_number: String },

    /// List all partners on a file
    Partners { file_id: String },

    /// Buyer information
    Buyer { buyer_id: String },

    /// Disbursements of a file
    Disbursement { file_id: String },

    /// Property information
    Property { property_id: String },

    /// Recording information of a file
    Recording { file_id: String },

    /// Seller information
    Seller { seller_id: String },

    /// Settlement fees of a file
    SettlementFees { file_id: String },

    /// Settlement information of a file
    Settlement { file_id: String },

    /// Policies issued for a file
    Policy { file_id: String },

    /// Find referral agents by name
    ReferralAgent { name: String },

    /// Sales volume summary for a referral agent
    ReferralAgentSales { agent_id: String },
}

impl Commands {
    /// The resource this command reads
    pub fn resource(&self) -> &'static Resource {
        match self {
            Commands::Me => &resources::CLIENT_INFO,
            Commands::Endpoints => &resources::ENDPOINT_CATALOG,
            Commands::FileByAddress { .. } => &resources::FILE_BY_ADDRESS,
            Commands::File { .. } => &resources::FILE_BY_ID,
            Commands::LenderFile { .. } => &resources::FILE_BY_LENDER_NUMBER,
            Commands::Partners { .. } => &resources::FILE_PARTNERS,
            Commands::Buyer { .. } => &resources::BUYER_INFO,
            Commands::Disbursement { .. } => &resources::DISBURSEMENT_INFO,
            Commands::Property { .. } => &resources::PROPERTY_INFO,
            Commands::Recording { .. } => &resources::RECORDING_INFO,
            Commands::Seller { .. } => &resources::SELLER_INFO,
            Commands::SettlementFees { .. } => &resources::SETTLEMENT_FEES,
            Commands::Settlement { .. } => &resources::SETTLEMENT_INFO,
            Commands::Policy { .. } => &resources::POLICY_INFO,
            Commands::ReferralAgent { .. } => &resources::REFERRAL_AGENT_LOOKUP,
            Commands::ReferralAgentSales { .. } => &resources::REFERRAL_AGENT_SALES_VOLUME,
        }
    }

    /// The identifier or free text passed to the resource
    pub fn argument(&self) -> Option<&str> {
        match self {
            Commands::Me | Commands::Endpoints => None,
            Commands::FileByAddress { address } => Some(address.as_str()),
            Commands::LenderFile { loan_number } => Some(loan_number.as_str()),
            Commands::Buyer { buyer_id } => Some(buyer_id.as_str()),
            Commands::Property { property_id } => Some(property_id.as_str()),
            Commands::Seller { seller_id } => Some(seller_id.as_str()),
            Commands::ReferralAgent { name } => Some(name.as_str()),
            Commands::ReferralAgentSales { agent_id } => Some(agent_id.as_str()),
            Commands::File { file_id }
            | Commands::Partners { file_id }
            | Commands::Disbursement { file_id }
            | Commands::Recording { file_id }
            | Commands::SettlementFees { file_id }
            | Commands::Settlement { file_id }
            | Commands::Policy { file_id } => Some(file_id.as_str()),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable listing
    Pretty,
}
