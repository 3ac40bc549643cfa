// ABOUTME: Server binary for the healthcare risk assessment portal
// ABOUTME: Loads configuration, opens the database and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! # Healthcare Portal Server Binary
//!
//! Starts the REST API with user accounts, risk scoring and assessment storage.

use anyhow::Result;
use clap::Parser;
use healthcare_portal::{
    config::{environment::ServerConfig, load_risk_engine_config, DatabaseUrl},
    database::Database,
    logging,
    resources::ServerResources,
    server::HealthcareServer,
    RiskEngine,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "healthcare-portal-server")]
#[command(about = "Healthcare portal - health risk scoring API with assessment history")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/portal.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }
    config.validate()?;

    info!("Starting healthcare portal");

    let risk_engine = match &config.risk_config_path {
        Some(path) => RiskEngine::with_config(&load_risk_engine_config(path)?)?,
        None => RiskEngine::new(),
    };

    let database = Database::new(&config.database.url.to_connection_string()).await?;

    let port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(database, risk_engine, config));
    let server = HealthcareServer::new(resources);

    if let Err(e) = server.run(port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    info!("Healthcare portal shut down cleanly");
    Ok(())
}
