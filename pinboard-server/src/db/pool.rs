//! Database connection pool management
//!
//! Uses sqlx PgPool with the driver's default limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::PgSettings;

/// Create a PostgreSQL connection pool without connecting.
///
/// Connections are opened on first use, so a missing or unreachable
/// database surfaces as a per-request store error.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&PgSettings::default());
/// ```
pub fn create_pool(settings: &PgSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(settings.connect_options())
}

/// Create a PostgreSQL connection pool from a URL, connecting eagerly.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails.
pub async fn create_pool_from_url(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().connect(database_url).await
}
