//! Photographer info endpoint

use axum::{extract::State, Json};
use folio_common::model::PhotographerInfo;

use crate::AppState;

/// GET /api/photographer
///
/// Returns the singleton photographer record.
pub async fn get_photographer(State(state): State<AppState>) -> Json<PhotographerInfo> {
    Json(state.catalog.photographer().clone())
}
