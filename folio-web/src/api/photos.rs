//! Photo catalog endpoints
//!
//! Clients always receive complete records; there are no pagination or
//! search parameters on this surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_common::model::Photo;
use serde_json::json;

use crate::AppState;

/// GET /api/photos
///
/// Returns the full catalog in authoring order.
pub async fn list_photos(State(state): State<AppState>) -> Json<Vec<Photo>> {
    Json(state.catalog.photos().to_vec())
}

/// GET /api/photos/:id
///
/// Returns the matching photo, or 404 when the id is unknown.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Photo>, PhotoError> {
    let photo = state.catalog.photo(&id).ok_or(PhotoError::NotFound)?;
    Ok(Json(photo.clone()))
}

/// Photo API errors
#[derive(Debug)]
pub enum PhotoError {
    NotFound,
}

impl IntoResponse for PhotoError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PhotoError::NotFound => (StatusCode::NOT_FOUND, "Photo not found"),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
