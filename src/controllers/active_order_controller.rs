use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::AppResult, models::ActiveOrder, services::active_order_service};

#[derive(Debug, Deserialize)]
pub struct StoreActiveOrderRequest {
    #[serde(flatten)]
    pub order: ActiveOrder,
    pub ttl: Option<u64>,
}

// POST /api/active-orders/:user_id
pub async fn store_active_order(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<StoreActiveOrderRequest>,
) -> AppResult<Response> {
    active_order_service::store_active_order(&state, &user_id, body.order, body.ttl).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Active order stored successfully",
    }))
    .into_response())
}

// GET /api/active-orders/:user_id
pub async fn get_active_order(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Response> {
    let active_order = active_order_service::get_active_order(&state, &user_id).await?;
    Ok(Json(json!({
        "success": true,
        "data": active_order,
    }))
    .into_response())
}

// DELETE /api/active-orders/:user_id
pub async fn remove_active_order(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Response> {
    active_order_service::remove_active_order(&state, &user_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Active order removed successfully",
    }))
    .into_response())
}
