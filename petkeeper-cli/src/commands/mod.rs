//! Command implementations for petkeeper CLI

pub mod migrate;
pub mod serve;

use clap::Args;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Used when neither `--database-url` nor `DATABASE_URL` is given
pub const DEFAULT_DATABASE_URL: &str = "sqlite://petkeeper.db?mode=rwc";

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}
