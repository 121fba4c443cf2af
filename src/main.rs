// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! OpsInsights CLI
//!
//! Command-line interface for the OpsInsights title and escrow API

use clap::Parser;
use opsinsights_client::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        if let Some(resolution) = e
            .error_record()
            .map(|record| record.resolution.as_str())
            .filter(|r| !r.is_empty())
        {
            eprintln!("Resolution: {resolution}");
        }
        std::process::exit(1);
    }
}
