//! Bibliotheca gateway CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use bibliotheca_gateway::cli::{Cli, Commands};
use bibliotheca_gateway::infrastructure::config::ConfigLoader;
use bibliotheca_gateway::infrastructure::depository::DepositoryClient;
use bibliotheca_gateway::infrastructure::logging::LoggerImpl;
use bibliotheca_gateway::services::{BranchCache, BranchGateway};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        bibliotheca_gateway::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging)?;

    // One cache per process, shared by every gateway built below.
    let cache = Arc::new(BranchCache::from_config(&config.cache));
    let client = Arc::new(DepositoryClient::new(&config.depository)?);
    let branches = BranchGateway::new(client, cache);

    match cli.command {
        Commands::Branch(command) => {
            bibliotheca_gateway::cli::commands::branch::execute(&branches, command, cli.json).await
        }
    }
}
