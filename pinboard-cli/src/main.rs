//! pinboard CLI - photo pin service
//!
//! Entry point for the `pinboard` binary:
//! - `serve` runs the HTTP API
//! - `init-db` creates the `pinned` table
//!
//! Settings come from flags, then environment variables, then a `.env`
//! file in the working directory.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "pinboard",
    author,
    version,
    about = "Search a photo catalog and keep a list of pinned photos"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the pinned-photos table if it does not exist
    InitDb(commands::init_db::InitDbArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before clap reads env fallbacks
    dotenvy::dotenv().ok();
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
