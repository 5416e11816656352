//! API error types with IntoResponse
//!
//! Validation failures are 400 with an `errors` list. Provider and store
//! failures keep the service's established convention: HTTP 200 with an
//! `error` field carrying the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::FieldError;
use crate::provider::ProviderError;

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed validation (400)
    Validation(Vec<FieldError>),

    /// Photo provider failed or rejected the call (200, logged)
    Provider(ProviderError),

    /// Pin store failed (200, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            Self::Provider(e) => {
                tracing::error!(error = %e, "photo provider call failed");
                (StatusCode::OK, json!({ "error": e.to_string() }))
            }
            Self::Store(e) => {
                tracing::error!(error = %e, "pin store call failed");
                (StatusCode::OK, json!({ "error": e.to_string() }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        Self::Validation(vec![e])
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    use crate::models::{Location, ValidationError};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::from(FieldError::new(
            Location::Body,
            ValidationError::Missing { field: "photoId" },
            None,
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["param"], "photoId");
        assert_eq!(body["errors"][0]["location"], "body");
    }

    #[tokio::test]
    async fn provider_error_is_200_with_message() {
        let err = ApiError::Provider(ProviderError::Api("Couldn't find Photo".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["error"], "Couldn't find Photo");
    }

    #[tokio::test]
    async fn store_error_is_200_with_message() {
        let err = ApiError::Store(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["error"], sqlx::Error::PoolTimedOut.to_string());
        assert!(body.get("errors").is_none());
    }
}
