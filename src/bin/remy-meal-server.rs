// ABOUTME: Server binary for the Remy meal planning API
// ABOUTME: Environment-driven configuration with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! # Remy Meal Server Binary
//!
//! Starts the meal planning REST API: week boards, shopping lists, macro
//! logs, and care-team linking over SQLite persistence.

use anyhow::Result;
use clap::Parser;
use remy_meal_server::{
    config::environment::ServerConfig, context::ServerResources, database::Database, logging,
    routes,
};
use std::sync::Arc;
use tracing::info;

/// Command-line overrides for environment configuration
#[derive(Parser)]
#[command(name = "remy-meal-server")]
#[command(about = "Remy Meal Planning API - meal-board sync and shopping-list backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (sqlite:path or sqlite::memory:)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container environments sometimes pass unexpected argv; fall back to
    // environment configuration rather than dying on a parse error
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration");
            Args {
                http_port: None,
                database_url: None,
            }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url =
            remy_meal_server::config::environment::DatabaseUrl::parse_url(&database_url)?;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Remy Meal Planning API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database.url);

    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(database, Arc::clone(&config)));
    let app = routes::api_router(resources);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives a shutdown request
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
