//! Photo search endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::SearchQuery;
use crate::http::server::AppState;
use crate::models::SearchResult;

/// GET /search?query=..&page=..&perPage=..
async fn search_photos(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery,
) -> Result<Json<SearchResult>, ApiError> {
    let result = state
        .provider
        .search_photos(&params.query, params.page, params.per_page)
        .await?;

    Ok(Json(result))
}

/// Search routes
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search_photos))
}
