//! CLI runner - executes commands
//!
//! Dispatch is one level deep: resolve config, build the client, run one
//! operation, print. Data commands print 2-space-indented JSON to stdout;
//! action commands print a single confirmation line. Exit-code contract:
//! `info`/`runtime` fail when the result is absent and `restart`/`pause`
//! when the action fails; `list`/`user` always succeed, even for an empty
//! result.

use crate::api::SpacesClient;
use crate::cli::commands::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::Result;
use clap::CommandFactory;
use serde::Serialize;
use std::process::ExitCode;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, returning the process exit code
    pub async fn run(&self) -> Result<ExitCode> {
        let Some(command) = &self.cli.command else {
            Cli::command()
                .print_help()
                .map_err(|e| crate::error::Error::Other(e.to_string()))?;
            return Ok(ExitCode::FAILURE);
        };

        let config = AppConfig::resolve(self.cli.endpoint.as_deref(), self.cli.token.as_deref())?;
        let client = SpacesClient::from_config(&config);

        match command {
            Commands::List {
                author,
                search,
                limit,
            } => {
                let results = client
                    .list_spaces(author.as_deref(), search.as_deref(), *limit)
                    .await;
                print_json(&results)?;
                Ok(ExitCode::SUCCESS)
            }

            Commands::Info { space_id } => match client.space_info(space_id).await {
                Some(info) => {
                    print_json(&info)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            },

            Commands::Restart { space_id } => {
                if client.restart_space(space_id).await {
                    println!("Successfully restarted space: {space_id}");
                    Ok(ExitCode::SUCCESS)
                } else {
                    Ok(ExitCode::FAILURE)
                }
            }

            Commands::Pause { space_id } => {
                if client.pause_space(space_id).await {
                    println!("Successfully paused space: {space_id}");
                    Ok(ExitCode::SUCCESS)
                } else {
                    Ok(ExitCode::FAILURE)
                }
            }

            Commands::Runtime { space_id } => match client.space_runtime(space_id).await {
                Some(status) => {
                    print_json(&status)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            },

            Commands::User { username } => {
                let results = client.list_user_spaces(username).await;
                print_json(&results)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Serialize a value as 2-space-indented JSON to stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
