//! In-memory photo provider for tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{PhotoProvider, ProviderError};
use crate::models::{Photo, SearchResult};

/// Message the mock returns for unknown ids, matching Unsplash
pub const NOT_FOUND_MESSAGE: &str = "Couldn't find Photo";

/// A search the mock has served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

struct Entry {
    photo: Photo,
    keywords: Vec<String>,
}

/// Mock photo provider backed by a small catalog
#[derive(Default)]
pub struct MockProvider {
    catalog: Mutex<Vec<Entry>>,
    failure: Mutex<Option<String>>,
    searches: Mutex<Vec<RecordedSearch>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a photo that can be fetched by id but matches no search.
    pub fn add_photo(&self, photo: Photo) {
        self.add_tagged(photo, &[]);
    }

    /// Add a photo found by searches for any of `keywords` (case-insensitive).
    pub fn add_tagged(&self, photo: Photo, keywords: &[&str]) {
        self.catalog.lock().unwrap().push(Entry {
            photo,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        });
    }

    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Searches served so far, oldest first.
    pub fn searches(&self) -> Vec<RecordedSearch> {
        self.searches.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), ProviderError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(ProviderError::Api(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PhotoProvider for MockProvider {
    async fn get_photo(&self, photo_id: &str) -> Result<Photo, ProviderError> {
        self.check_failure()?;
        self.catalog
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.photo.photo_id == photo_id)
            .map(|e| e.photo.clone())
            .ok_or_else(|| ProviderError::Api(NOT_FOUND_MESSAGE.to_string()))
    }

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResult, ProviderError> {
        self.searches.lock().unwrap().push(RecordedSearch {
            query: query.to_string(),
            page,
            per_page,
        });
        self.check_failure()?;

        let needle = query.to_lowercase();
        let matching: Vec<Photo> = self
            .catalog
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.keywords.contains(&needle))
            .map(|e| e.photo.clone())
            .collect();

        let total = matching.len() as u64;
        let per_page = per_page.max(1) as usize;
        let total_pages = matching.len().div_ceil(per_page) as u64;
        let skip = (page.max(1) as usize - 1) * per_page;

        Ok(SearchResult {
            total,
            total_pages,
            photos: matching.into_iter().skip(skip).take(per_page).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            photo_id: id.into(),
            blur_hash: None,
            raw_url: format!("raw/{id}"),
            small_url: format!("small/{id}"),
        }
    }

    fn cats(n: usize) -> MockProvider {
        let mock = MockProvider::new();
        for i in 0..n {
            mock.add_tagged(photo(&format!("cat{i}")), &["Cats"]);
        }
        mock.add_tagged(photo("dog"), &["dogs"]);
        mock
    }

    #[tokio::test]
    async fn get_known_and_unknown() {
        let mock = cats(1);
        assert_eq!(mock.get_photo("cat0").await.unwrap(), photo("cat0"));
        let err = mock.get_photo("nope").await.unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn search_pages_over_matches() {
        let mock = cats(5);

        let first = mock.search_photos("cats", 1, 2).await.unwrap();
        assert_eq!((first.total, first.total_pages), (5, 3));
        assert_eq!(first.photos, vec![photo("cat0"), photo("cat1")]);

        let last = mock.search_photos("CATS", 3, 2).await.unwrap();
        assert_eq!(last.photos, vec![photo("cat4")]);

        let beyond = mock.search_photos("cats", 4, 2).await.unwrap();
        assert!(beyond.photos.is_empty());
    }

    #[tokio::test]
    async fn search_without_matches() {
        let result = cats(2).search_photos("birds", 1, 30).await.unwrap();
        assert_eq!((result.total, result.total_pages), (0, 0));
    }

    #[tokio::test]
    async fn failure_applies_to_all_calls() {
        let mock = cats(1);
        mock.fail_with("Rate Limit Exceeded");
        assert!(mock.get_photo("cat0").await.is_err());
        assert!(mock.search_photos("cats", 1, 1).await.is_err());
        assert_eq!(mock.searches().len(), 1);
    }
}
