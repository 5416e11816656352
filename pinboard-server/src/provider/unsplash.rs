//! Unsplash API client
//!
//! Direct REST integration for photo lookup and search.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{PhotoProvider, ProviderError};
use crate::config::ProviderSettings;
use crate::models::{Photo, SearchResult};

const API_VERSION: &str = "v1";

/// Photo as returned by the Unsplash API (fields we use)
#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    id: String,
    blur_hash: Option<String>,
    urls: UnsplashUrls,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    raw: String,
    small: String,
}

#[derive(Debug, Deserialize)]
struct UnsplashSearch {
    total: u64,
    total_pages: u64,
    results: Vec<UnsplashPhoto>,
}

/// Error body: `{"errors": ["..."]}`
#[derive(Debug, Deserialize)]
struct UnsplashErrors {
    #[serde(default)]
    errors: Vec<String>,
}

impl From<UnsplashPhoto> for Photo {
    fn from(p: UnsplashPhoto) -> Self {
        Self {
            photo_id: p.id,
            blur_hash: p.blur_hash,
            raw_url: p.urls.raw,
            small_url: p.urls.small,
        }
    }
}

impl From<UnsplashSearch> for SearchResult {
    fn from(s: UnsplashSearch) -> Self {
        Self {
            total: s.total,
            total_pages: s.total_pages,
            photos: s.results.into_iter().map(Photo::from).collect(),
        }
    }
}

/// Unsplash client
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashClient {
    pub fn new(settings: &ProviderSettings) -> Self {
        if settings.access_key.is_none() {
            tracing::warn!("no Unsplash access key configured; provider calls will be rejected");
        }
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            access_key: settings.access_key.clone(),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json")
            .header("Accept-Version", API_VERSION);

        match &self.access_key {
            Some(key) => request.header(AUTHORIZATION, format!("Client-ID {}", key)),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ProviderError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(first_error_message(status, &body)));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// First message of an Unsplash error body, or the status text.
fn first_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<UnsplashErrors>(body)
        .ok()
        .and_then(|e| e.errors.into_iter().next())
        .unwrap_or_else(|| status.to_string())
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    async fn get_photo(&self, photo_id: &str) -> Result<Photo, ProviderError> {
        let path = format!("/photos/{}", urlencoding::encode(photo_id));
        let photo: UnsplashPhoto = self.send(self.get(&path)).await?;
        Ok(photo.into())
    }

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResult, ProviderError> {
        let request = self.get("/search/photos").query(&[
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]);
        let search: UnsplashSearch = self.send(request).await?;
        Ok(search.into())
    }
}
