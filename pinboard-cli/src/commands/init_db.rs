//! Schema bootstrap command
//!
//! One-shot: connects, runs the schema script, reports `finished` or
//! `finished with errors`. A failed run exits non-zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pinboard_server::db::schema::{bootstrap, load_script, SCHEMA_SQL};
use pinboard_server::PgSettings;

use crate::args::PgArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQL script to run instead of the bundled schema
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub pg: PgArgs,
}

/// Run the schema bootstrap
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let settings = PgSettings::from(args.pg);

    match bootstrap_from(&settings, args.file).await {
        Ok(count) => {
            tracing::info!(statements = count, "finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!("finished with errors");
            Err(e)
        }
    }
}

async fn bootstrap_from(settings: &PgSettings, file: Option<PathBuf>) -> Result<usize> {
    let script = match file {
        Some(path) => load_script(&path).await?,
        None => SCHEMA_SQL.to_string(),
    };

    bootstrap(settings, &script)
        .await
        .context("Schema bootstrap failed")
}
