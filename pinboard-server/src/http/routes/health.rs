//! Liveness endpoint

use axum::{routing::get, Router};

/// GET /
async fn greeting() -> &'static str {
    "Hello world!"
}

/// Liveness routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(greeting))
}
