//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use petkeeper_server::db::{create_pool_with_options, schema};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the person and pet tables, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(
        &args.database.database_url,
        args.database.max_connections,
    )
    .await
    .context("Failed to create database pool")?;

    schema::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    println!("Schema ready at {}", args.database.database_url);
    Ok(())
}
