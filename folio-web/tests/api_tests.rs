//! Integration tests for the folio-web JSON API
//!
//! Tests cover:
//! - GET /api/photos (full catalog, order, wire shape)
//! - GET /api/photos/:id (lookup, 404 body)
//! - GET /api/photographer
//! - GET /health

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use folio_common::Catalog;
use folio_web::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: Create app over the embedded catalog
fn setup_app() -> axum::Router {
    let catalog = Catalog::builtin().expect("embedded catalog should parse");
    build_router(AppState::new(catalog))
}

/// Test helper: Create request
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "folio-web");
    assert!(body["version"].is_string());
}

// =============================================================================
// Photo Listing Tests
// =============================================================================

#[tokio::test]
async fn test_list_photos_returns_full_catalog_in_order() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/photos"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let photos = body.as_array().expect("array of photos");
    assert!(photos.len() >= 2);
    assert_eq!(photos[0]["id"], "city-shadows");
    assert_eq!(photos[1]["id"], "natural-grace");
}

#[tokio::test]
async fn test_list_photos_wire_shape_is_camel_case() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/photos"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let first = body.as_array().unwrap()[0].as_object().unwrap();

    assert!(first["imageUrl"].is_string());
    assert!(first["aspectRatio"].is_string());
    assert!(first["tags"].is_array());
    assert!(first["featured"].is_boolean());
    assert!(first.get("image_url").is_none());
    assert!(first.get("aspect_ratio").is_none());
}

// =============================================================================
// Photo Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_get_photo_by_id() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/photos/city-shadows"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["id"], "city-shadows");
    assert_eq!(body["title"], "City Shadows");
    assert_eq!(body["camera"], "Sony A7R IV");
}

#[tokio::test]
async fn test_get_photo_unknown_id_is_404() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/photos/unknown-id"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "message": "Photo not found" }));
}

#[tokio::test]
async fn test_get_photo_optional_fields_omitted() {
    let app = setup_app();

    // Market Mornings is authored without optional EXIF fields
    let response = app
        .oneshot(test_request("GET", "/api/photos/market-mornings"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let object = body.as_object().unwrap();
    assert!(object.get("lens").is_none());
    assert!(object.get("iso").is_none());
    assert!(object.get("aperture").is_none());
    assert!(object.get("shutterSpeed").is_none());
    assert!(object.get("focalLength").is_none());
}

// =============================================================================
// Photographer Tests
// =============================================================================

#[tokio::test]
async fn test_get_photographer() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/photographer"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "Maya Reinholt");
    assert!(body["bio"].is_string());
    assert!(body["email"].is_string());
    assert!(body["specialties"].is_array());
}
