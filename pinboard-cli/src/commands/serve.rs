//! HTTP server command
//!
//! Builds the pin store and provider client once, then serves until
//! Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use pinboard_server::db::{create_pool, MemoryPinStore, PgPinStore, PinStore};
use pinboard_server::provider::{PhotoProvider, UnsplashClient};
use pinboard_server::{run_server, AppState, PgSettings, ProviderSettings, ServerConfig};

use crate::args::{PgArgs, ProviderArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Keep pins in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub pg: PgArgs,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let provider_settings = ProviderSettings::from(args.provider);
    let provider: Arc<dyn PhotoProvider> = Arc::new(UnsplashClient::new(&provider_settings));

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };

    if args.memory {
        tracing::warn!("using in-memory pin store; pins are lost on exit");
        let state = AppState::new(Arc::new(MemoryPinStore::new()), provider);
        return run_server(state, config).await.context("Server error");
    }

    let pg_settings = PgSettings::from(args.pg);
    tracing::info!(database = %pg_settings.display_target(), "using PostgreSQL pin store");

    // Lazy pool: connection problems show up per request
    let pool = create_pool(&pg_settings);
    let pins: Arc<dyn PinStore> = Arc::new(PgPinStore::new(pool.clone()));

    let result = run_server(AppState::new(pins, provider), config).await;
    pool.close().await;

    result.context("Server error")
}
