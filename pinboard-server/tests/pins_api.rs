//! End-to-end API behaviour over the in-memory pin store and mock provider.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pinboard_server::db::{MemoryPinStore, PinStore, StoreError};
use pinboard_server::models::{Photo, PinnedPhoto};
use pinboard_server::provider::mock::RecordedSearch;
use pinboard_server::provider::MockProvider;
use pinboard_server::{build_router, AppState};

struct Harness {
    pins: Arc<MemoryPinStore>,
    provider: Arc<MockProvider>,
    app: Router,
}

impl Harness {
    fn new() -> Self {
        let pins = Arc::new(MemoryPinStore::new());
        let provider = Arc::new(MockProvider::new());
        let app = build_router(AppState::new(pins.clone(), provider.clone()));
        Self {
            pins,
            provider,
            app,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn with_body(&self, method: Method, body: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri("/pin")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn pin(&self, photo_id: &str) -> (StatusCode, Value) {
        self.with_body(Method::POST, &json!({ "photoId": photo_id }).to_string())
            .await
    }

    async fn unpin(&self, photo_id: &str) -> (StatusCode, Value) {
        self.with_body(Method::DELETE, &json!({ "photoId": photo_id }).to_string())
            .await
    }

    async fn pinned_ids(&self) -> Vec<String> {
        self.pins
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.photo_id)
            .collect()
    }
}

fn photo(id: &str) -> Photo {
    Photo {
        photo_id: id.into(),
        blur_hash: Some(format!("hash-{id}")),
        raw_url: format!("https://images.example/{id}?raw"),
        small_url: format!("https://images.example/{id}?w=400"),
    }
}

#[tokio::test]
async fn empty_pin_list() {
    let h = Harness::new();
    let (status, body) = h.get("/pin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "photos": [] }));
}

#[tokio::test]
async fn pinning_twice_stores_one_row() {
    let h = Harness::new();
    h.provider.add_photo(photo("X"));

    assert_eq!(h.pin("X").await, (StatusCode::OK, json!({ "photoId": "X" })));
    assert_eq!(h.pin("X").await, (StatusCode::OK, json!({ "photoId": "X" })));

    assert_eq!(h.pinned_ids().await, vec!["X"]);
}

#[tokio::test]
async fn pins_list_newest_first() {
    let h = Harness::new();
    h.provider.add_photo(photo("A"));
    h.provider.add_photo(photo("B"));

    h.pin("A").await;
    h.pin("B").await;

    let (_, body) = h.get("/pin").await;
    let ids: Vec<_> = body["photos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["photoId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["B", "A"]);
}

#[tokio::test]
async fn round_trip_pin_list_delete() {
    let h = Harness::new();
    h.provider.add_photo(photo("X"));

    h.pin("X").await;
    let (_, body) = h.get("/pin").await;
    assert_eq!(
        body["photos"][0],
        json!({
            "photoId": "X",
            "blurHash": "hash-X",
            "rawUrl": "https://images.example/X?raw",
            "smallUrl": "https://images.example/X?w=400"
        })
    );

    assert_eq!(
        h.unpin("X").await,
        (StatusCode::OK, json!({ "photoId": "X" }))
    );
    let (_, body) = h.get("/pin").await;
    assert_eq!(body, json!({ "photos": [] }));
}

#[tokio::test]
async fn deleting_unknown_id_succeeds() {
    let h = Harness::new();
    h.provider.add_photo(photo("A"));
    h.pin("A").await;

    assert_eq!(
        h.unpin("never-pinned").await,
        (StatusCode::OK, json!({ "photoId": "never-pinned" }))
    );
    assert_eq!(h.pinned_ids().await, vec!["A"]);
}

#[tokio::test]
async fn create_without_photo_id_is_400() {
    let h = Harness::new();
    h.provider.add_photo(photo("A"));

    let (status, body) = h.with_body(Method::POST, "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert_eq!(errors[0]["param"], "photoId");
    assert!(h.pinned_ids().await.is_empty());
}

#[tokio::test]
async fn create_with_non_string_photo_id_is_400() {
    let h = Harness::new();
    let (status, body) = h.with_body(Method::POST, r#"{"photoId": 12}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["value"], 12);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let h = Harness::new();
    let (status, body) = h.with_body(Method::POST, "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "photoId is required");

    let (status, _) = h
        .send(
            Request::builder()
                .method(Method::DELETE)
                .uri("/pin")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_with_empty_photo_id_is_400() {
    let h = Harness::new();
    let (status, body) = h.unpin("").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "photoId cannot be empty");
}

#[tokio::test]
async fn unknown_photo_is_200_with_error_and_not_stored() {
    let h = Harness::new();

    let (status, body) = h.pin("ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Couldn't find Photo" }));
    assert!(h.pinned_ids().await.is_empty());
}

#[tokio::test]
async fn repin_keeps_first_fields() {
    let h = Harness::new();
    h.provider.add_photo(photo("X"));
    h.pin("X").await;

    let mut changed = photo("X");
    changed.blur_hash = Some("newer".into());
    h.pins.insert_if_absent(&changed).await.unwrap();

    let (_, body) = h.get("/pin").await;
    assert_eq!(body["photos"][0]["blurHash"], "hash-X");
}

#[tokio::test]
async fn search_returns_page_with_totals() {
    let h = Harness::new();
    for i in 0..5 {
        h.provider.add_tagged(photo(&format!("cat{i}")), &["cats"]);
    }

    let (status, body) = h.get("/search?query=cats&page=1&perPage=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 3);
    let photos = body["photos"].as_array().unwrap();
    assert!(photos.len() <= 2);
    assert_eq!(photos[0]["photoId"], "cat0");
    assert_eq!(photos[0]["smallUrl"], "https://images.example/cat0?w=400");
}

#[tokio::test]
async fn search_with_non_numeric_paging_is_400() {
    let h = Harness::new();

    let (status, body) = h.get("/search?query=cats&page=abc&perPage=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    assert!(h.provider.searches().is_empty());
}

#[tokio::test]
async fn search_without_query_is_400() {
    let h = Harness::new();
    let (status, body) = h.get("/search?page=1&perPage=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["param"], "query");
}

#[tokio::test]
async fn search_defaults_non_positive_paging() {
    let h = Harness::new();

    let (status, _) = h.get("/search?query=sea%20cliffs&page=0&perPage=-4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        h.provider.searches(),
        vec![RecordedSearch {
            query: "sea cliffs".into(),
            page: 1,
            per_page: 30,
        }]
    );
}

#[tokio::test]
async fn provider_failure_during_search_is_200_with_error() {
    let h = Harness::new();
    h.provider.fail_with("Rate Limit Exceeded");

    let (status, body) = h.get("/search?query=cats&page=1&perPage=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Rate Limit Exceeded" }));
}

struct UnreachableStore;

#[async_trait::async_trait]
impl PinStore for UnreachableStore {
    async fn list(&self) -> Result<Vec<PinnedPhoto>, StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn insert_if_absent(&self, _: &Photo) -> Result<bool, StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn delete_by_id(&self, _: &str) -> Result<bool, StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[tokio::test]
async fn store_failure_is_200_with_error() {
    let provider = Arc::new(MockProvider::new());
    provider.add_photo(photo("X"));
    let app = build_router(AppState::new(Arc::new(UnreachableStore), provider));
    let expected = json!({ "error": sqlx::Error::PoolTimedOut.to_string() });

    for request in [
        Request::builder().uri("/pin").body(Body::empty()).unwrap(),
        Request::builder()
            .method(Method::POST)
            .uri("/pin")
            .body(Body::from(r#"{"photoId":"X"}"#))
            .unwrap(),
        Request::builder()
            .method(Method::DELETE)
            .uri("/pin")
            .body(Body::from(r#"{"photoId":"X"}"#))
            .unwrap(),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, expected);
    }
}
