//! CLI runner - executes commands

use crate::api::ApiClient;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::output;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        config.validate()?;

        let authenticator = Arc::new(config.authenticator()?);
        authenticator.authenticate().await?;
        info!(api_url = %config.api_url, "Authenticated");

        let mut client = ApiClient::with_config(authenticator, config.http_config())?;

        match &self.cli.command {
            Commands::Me => {
                let info = client.my_client_info().await?;
                match self.cli.format {
                    OutputFormat::Json => emit_json(&info),
                    OutputFormat::Pretty => {
                        output::print_client_info(&info);
                        Ok(())
                    }
                }
            }
            Commands::Endpoints => {
                let endpoints = client.list_api_endpoints().await?;
                match self.cli.format {
                    OutputFormat::Json => emit_json(&endpoints),
                    OutputFormat::Pretty => {
                        output::print_endpoints(&endpoints);
                        Ok(())
                    }
                }
            }
            command => {
                let (client_id, connector_id) = self.resolve_scope(&mut client).await?;
                let resource = command.resource();
                let records = client
                    .fetch_scoped(
                        resource,
                        &client_id,
                        &connector_id,
                        command.argument().unwrap_or_default(),
                    )
                    .await?;
                debug!(resource = resource.name, count = records.len(), "Fetched records");

                match self.cli.format {
                    OutputFormat::Json => emit_json(&records),
                    OutputFormat::Pretty => {
                        output::print_records(resource, &records);
                        Ok(())
                    }
                }
            }
        }
    }

    /// Load configuration: file first, then flags and environment
    fn load_config(&self) -> Result<ClientConfig> {
        let base = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        Ok(base.merge(
            self.cli.api_url.clone(),
            self.cli.key.clone(),
            self.cli.secret.clone(),
        ))
    }

    /// Client and connector IDs from flags, looked up with `me` when missing
    async fn resolve_scope(&self, client: &mut ApiClient) -> Result<(String, String)> {
        if let (Some(client_id), Some(connector_id)) =
            (&self.cli.client_id, &self.cli.connector_id)
        {
            return Ok((client_id.clone(), connector_id.clone()));
        }

        client.my_client_info().await?;

        let client_id = match &self.cli.client_id {
            Some(id) => id.clone(),
            None => client
                .client_id()
                .map(String::from)
                .ok_or_else(|| Error::config("Client ID could not be determined"))?,
        };
        let connector_id = match &self.cli.connector_id {
            Some(id) => id.clone(),
            None => client.connector_id().map(String::from).ok_or_else(|| {
                Error::config("No API connector available (use --connector-id)")
            })?,
        };

        debug!(%client_id, %connector_id, "Resolved scope");
        Ok((client_id, connector_id))
    }
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
