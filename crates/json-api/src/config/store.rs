//! Store Config

use std::path::PathBuf;

use clap::Args;

/// Backing store settings.
///
/// With a database URL the Postgres stores are used; otherwise carts live in
/// memory for the lifetime of the process.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// YAML file of users and items loaded into the in-memory store
    #[arg(long, env = "SEED_FILE", conflicts_with = "database_url")]
    pub seed_file: Option<PathBuf>,
}
