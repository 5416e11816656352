//! Photo records shared by the provider client, the pin store and the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Canonical photo record, normalised from the provider.
///
/// This is also the wire shape of a pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub photo_id: String,
    /// Opaque placeholder encoding; the provider may not have one.
    pub blur_hash: Option<String>,
    pub raw_url: String,
    pub small_url: String,
}

/// Row of the `pinned` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PinnedPhoto {
    pub photo_id: String,
    pub blur_hash: Option<String>,
    pub raw_url: String,
    pub small_url: String,
    pub pinned_at: DateTime<Utc>,
}

impl PinnedPhoto {
    /// Pin a photo at the given instant.
    pub fn from_photo(photo: &Photo, pinned_at: DateTime<Utc>) -> Self {
        Self {
            photo_id: photo.photo_id.clone(),
            blur_hash: photo.blur_hash.clone(),
            raw_url: photo.raw_url.clone(),
            small_url: photo.small_url.clone(),
            pinned_at,
        }
    }
}

impl From<PinnedPhoto> for Photo {
    fn from(p: PinnedPhoto) -> Self {
        Self {
            photo_id: p.photo_id,
            blur_hash: p.blur_hash,
            raw_url: p.raw_url,
            small_url: p.small_url,
        }
    }
}

/// One page of provider search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub total: u64,
    pub total_pages: u64,
    pub photos: Vec<Photo>,
}
