//! Shared connection arguments
//!
//! Every flag falls back to the environment variable the service has
//! always read, then to a default.

use clap::Args;

use pinboard_server::config::DEFAULT_UNSPLASH_URL;
use pinboard_server::{PgSettings, ProviderSettings};

/// PostgreSQL connection arguments
#[derive(Args, Debug, Clone)]
pub struct PgArgs {
    /// Database host
    #[arg(long, env = "PG_HOST", default_value = "localhost")]
    pub pg_host: String,

    /// Database port
    #[arg(long, env = "PG_PORT", default_value_t = 5432)]
    pub pg_port: u16,

    /// Database name
    #[arg(long, env = "PG_DATABASE", default_value = "postgres")]
    pub pg_database: String,

    /// Database user
    #[arg(long, env = "PG_USER", default_value = "postgres")]
    pub pg_user: String,

    /// Database password
    #[arg(long, env = "PG_PASSWORD", hide_env_values = true)]
    pub pg_password: Option<String>,
}

impl From<PgArgs> for PgSettings {
    fn from(args: PgArgs) -> Self {
        Self {
            host: args.pg_host,
            port: args.pg_port,
            database: args.pg_database,
            user: args.pg_user,
            password: args.pg_password,
        }
    }
}

/// Photo provider arguments
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Unsplash access key
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub unsplash_access_key: Option<String>,

    /// Unsplash API base URL
    #[arg(long, env = "UNSPLASH_API_URL", default_value = DEFAULT_UNSPLASH_URL)]
    pub unsplash_url: String,
}

impl From<ProviderArgs> for ProviderSettings {
    fn from(args: ProviderArgs) -> Self {
        Self {
            access_key: args.unsplash_access_key,
            base_url: args.unsplash_url,
        }
    }
}
