//! Pin repository
//!
//! Three operations over the `pinned` table:
//! - list: newest pin first
//! - insert_if_absent: INSERT with ON CONFLICT DO NOTHING (first pin wins)
//! - delete_by_id: deleting an unknown id is not an error

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::{Photo, PinnedPhoto};

/// Pin store error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("pin store unavailable: {0}")]
    Unavailable(String),
}

/// Storage for pinned photos
#[async_trait]
pub trait PinStore: Send + Sync {
    /// All pins, most recently pinned first.
    async fn list(&self) -> Result<Vec<PinnedPhoto>, StoreError>;

    /// Insert a pin unless one with the same id exists.
    ///
    /// Returns whether a row was written. An existing pin keeps its
    /// original fields.
    async fn insert_if_absent(&self, photo: &Photo) -> Result<bool, StoreError>;

    /// Delete a pin by id. Returns whether a row was removed.
    async fn delete_by_id(&self, photo_id: &str) -> Result<bool, StoreError>;
}

/// PostgreSQL pin store
#[derive(Clone)]
pub struct PgPinStore {
    pool: PgPool,
}

impl PgPinStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PinStore for PgPinStore {
    async fn list(&self) -> Result<Vec<PinnedPhoto>, StoreError> {
        let pins = sqlx::query_as::<_, PinnedPhoto>(
            r#"
            SELECT photo_id, blur_hash, raw_url, small_url, pinned_at
            FROM pinned
            ORDER BY pinned_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pins)
    }

    async fn insert_if_absent(&self, photo: &Photo) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO pinned (photo_id, blur_hash, raw_url, small_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (photo_id) DO NOTHING
            "#,
        )
        .bind(&photo.photo_id)
        .bind(&photo.blur_hash)
        .bind(&photo.raw_url)
        .bind(&photo.small_url)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, photo_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM pinned WHERE photo_id = $1")
            .bind(photo_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// In-memory pin store, newest first
#[derive(Default)]
pub struct MemoryPinStore {
    pins: Mutex<Vec<PinnedPhoto>>,
}

impl MemoryPinStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<PinnedPhoto>>, StoreError> {
        self.pins
            .lock()
            .map_err(|_| StoreError::Unavailable("pin store lock poisoned".into()))
    }
}

#[async_trait]
impl PinStore for MemoryPinStore {
    async fn list(&self) -> Result<Vec<PinnedPhoto>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn insert_if_absent(&self, photo: &Photo) -> Result<bool, StoreError> {
        let mut pins = self.lock()?;
        if pins.iter().any(|p| p.photo_id == photo.photo_id) {
            return Ok(false);
        }
        pins.insert(0, PinnedPhoto::from_photo(photo, Utc::now()));
        Ok(true)
    }

    async fn delete_by_id(&self, photo_id: &str) -> Result<bool, StoreError> {
        let mut pins = self.lock()?;
        let before = pins.len();
        pins.retain(|p| p.photo_id != photo_id);
        Ok(pins.len() != before)
    }
}
