//! Custom Axum extractors
//!
//! Rejections are always `ApiError::Validation`, so malformed input gets
//! the same `{"errors": [...]}` body as a failed field check.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{FieldError, Location, PhotoId, SearchParams, ValidationError};

/// `{"photoId": "..."}` request body with a validated id.
///
/// The body is read as JSON regardless of content type; anything that
/// doesn't decode to an object counts as a missing `photoId`.
pub struct PinBody(pub PhotoId);

impl<S> FromRequest<S> for PinBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|_| {
            FieldError::new(
                Location::Body,
                ValidationError::Missing { field: "photoId" },
                None,
            )
        })?;

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Ok(Self(PhotoId::from_body(&body)?))
    }
}

/// Validated `/search` query string
pub struct SearchQuery(pub SearchParams);

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: HashMap<String, String> = Query::from_request_parts(parts, state)
            .await
            .map(|Query(raw)| raw)
            .unwrap_or_default();

        SearchParams::from_query(&raw)
            .map(Self)
            .map_err(ApiError::Validation)
    }
}
