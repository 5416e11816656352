//! Photo provider trait and implementations
//!
//! Provides a testable interface over the remote photo catalog, with:
//! - Unsplash REST client using reqwest
//! - Mock implementation for testing
//!
//! One outbound call per operation. No retries, no caching.

pub mod mock;
pub mod unsplash;

use async_trait::async_trait;

use crate::models::{Photo, SearchResult};

pub use mock::MockProvider;
pub use unsplash::UnsplashClient;

/// Error from the photo provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with an error; carries its first message
    #[error("{0}")]
    Api(String),

    #[error("photo provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected photo provider response: {0}")]
    Decode(String),
}

/// Remote photo catalog
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Fetch one photo by its provider id.
    async fn get_photo(&self, photo_id: &str) -> Result<Photo, ProviderError>;

    /// Search the catalog. `page` and `per_page` are at least 1.
    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResult, ProviderError>;
}
