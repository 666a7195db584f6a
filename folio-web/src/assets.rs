//! Embedded static asset routes
//!
//! The stylesheet and the small lightbox script are compiled into the
//! binary and served with explicit content types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const APP_JS: &str = include_str!("ui/app.js");
const STYLESHEET: &str = include_str!("ui/folio.css");

/// GET /static/app.js
///
/// Serves the lightbox / keyboard navigation script
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/folio.css
///
/// Serves the site stylesheet
pub async fn serve_stylesheet() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLESHEET).into_response()
}
