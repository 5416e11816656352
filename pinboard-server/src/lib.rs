//! pinboard-server: photo search and pinned photo storage over HTTP
//!
//! Wraps a photo provider (Unsplash) and a single PostgreSQL table of
//! pinned photos behind a small JSON API.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod provider;

pub use config::{PgSettings, ProviderSettings};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
