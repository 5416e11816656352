//! Schema bootstrap for the `pinned` table
//!
//! Runs a SQL script over a single dedicated connection. The script is
//! split on semicolons that end a line; each statement runs in order and
//! the first failure aborts the run. Statements are `IF NOT EXISTS`, so
//! running twice is safe. Nothing guards against concurrent runs.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use crate::config::PgSettings;

/// Bundled schema script
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// A `;` followed only by whitespace up to the end of a line
static STATEMENT_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m);\s*$").expect("invalid statement regex"));

/// Fragments this short are leftovers between separators, not statements.
const MIN_STATEMENT_LEN: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to read schema script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to connect to {target}: {source}")]
    Connect { target: String, source: sqlx::Error },

    #[error("schema statement {index} failed: {source}")]
    Statement { index: usize, source: sqlx::Error },
}

/// Split a SQL script into executable statements.
pub fn split_statements(sql: &str) -> Vec<&str> {
    STATEMENT_END
        .split(sql)
        .map(str::trim)
        .filter(|s| s.len() > MIN_STATEMENT_LEN)
        .collect()
}

/// Read a schema script from disk.
pub async fn load_script(path: &Path) -> Result<String, BootstrapError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BootstrapError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Connect and execute every statement of `script`.
///
/// Returns the number of statements executed. The connection is closed
/// whether or not the run succeeds.
pub async fn bootstrap(settings: &PgSettings, script: &str) -> Result<usize, BootstrapError> {
    bootstrap_with_options(&settings.connect_options(), &settings.display_target(), script).await
}

/// Same as [`bootstrap`], for callers that already hold connect options.
/// `target` is only used in logs and errors.
pub async fn bootstrap_with_options(
    options: &PgConnectOptions,
    target: &str,
    script: &str,
) -> Result<usize, BootstrapError> {
    let statements = split_statements(script);

    tracing::info!(%target, statements = statements.len(), "bootstrapping schema");

    let mut conn = PgConnection::connect_with(options)
        .await
        .map_err(|source| BootstrapError::Connect {
            target: target.to_string(),
            source,
        })?;

    let result = run_statements(&mut conn, &statements).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close bootstrap connection");
    }

    result
}

async fn run_statements(
    conn: &mut PgConnection,
    statements: &[&str],
) -> Result<usize, BootstrapError> {
    for (i, statement) in statements.iter().enumerate() {
        let index = i + 1;
        tracing::debug!(index, "executing schema statement");
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .map_err(|source| BootstrapError::Statement { index, source })?;
    }
    Ok(statements.len())
}
