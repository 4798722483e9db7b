use axum::{
    Json,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "OK", "service": "order-service" }))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": format!("Route {} not found", uri.path()),
        })),
    )
}
