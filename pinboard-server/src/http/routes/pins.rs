//! Pin endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::PinBody;
use crate::http::server::AppState;
use crate::models::Photo;

/// Pin list response
#[derive(Serialize)]
pub struct PinListResponse {
    pub photos: Vec<Photo>,
}

/// Pin create/delete response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinResponse {
    pub photo_id: String,
}

/// GET /pin - list pins, newest first
async fn list_pins(State(state): State<AppState>) -> Result<Json<PinListResponse>, ApiError> {
    let pins = state.pins.list().await?;

    Ok(Json(PinListResponse {
        photos: pins.into_iter().map(Photo::from).collect(),
    }))
}

/// POST /pin - look the photo up at the provider, then store it
async fn create_pin(
    State(state): State<AppState>,
    PinBody(photo_id): PinBody,
) -> Result<Json<PinResponse>, ApiError> {
    let photo = state.provider.get_photo(photo_id.as_str()).await?;
    let inserted = state.pins.insert_if_absent(&photo).await?;
    tracing::debug!(%photo_id, inserted, "pin stored");

    Ok(Json(PinResponse {
        photo_id: photo_id.into_string(),
    }))
}

/// DELETE /pin - remove a pin; unknown ids are fine
async fn delete_pin(
    State(state): State<AppState>,
    PinBody(photo_id): PinBody,
) -> Result<Json<PinResponse>, ApiError> {
    let deleted = state.pins.delete_by_id(photo_id.as_str()).await?;
    tracing::debug!(%photo_id, deleted, "pin removed");

    Ok(Json(PinResponse {
        photo_id: photo_id.into_string(),
    }))
}

/// Pin routes
pub fn router() -> Router<AppState> {
    Router::new().route("/pin", get(list_pins).post(create_pin).delete(delete_pin))
}
