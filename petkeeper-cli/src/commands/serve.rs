//! HTTP server command
//!
//! Opens the database, makes sure the schema exists, and serves the
//! pets API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use petkeeper_server::db::{create_pool_with_options, schema};
use petkeeper_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PETKEEPER_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting petkeeper server on {}", args.bind);

    let pool = create_pool_with_options(
        &args.database.database_url,
        args.database.max_connections,
    )
    .await
    .context("Failed to create database pool")?;

    schema::run(&pool)
        .await
        .context("Failed to prepare database schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
