//! folio-web library - portfolio HTTP service
//!
//! Serves the read-only JSON API over the photo catalog plus the
//! server-rendered gallery and detail pages.

use std::sync::Arc;

use axum::Router;
use folio_common::Catalog;

pub mod api;
pub mod assets;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Photo catalog (read-only after startup)
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    // Read-only JSON API
    let api = Router::new()
        .route("/api/photos", get(api::photos::list_photos))
        .route("/api/photos/:id", get(api::photos::get_photo))
        .route("/api/photographer", get(api::photographer::get_photographer));

    // Server-rendered pages and embedded assets
    let pages = Router::new()
        .route("/", get(views::gallery::gallery_page))
        .route("/photo/:id", get(views::detail::detail_page))
        .route("/static/app.js", get(assets::serve_app_js))
        .route("/static/folio.css", get(assets::serve_stylesheet));

    Router::new()
        .merge(api)
        .merge(pages)
        .merge(api::health_routes())
        .with_state(state)
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
