use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{OrderItem, OrderStatus, PaymentUpdate, UpdateOrder},
    services::{
        order_service::{self, CreateOrderRequest},
        shipping_service::{self, VehicleProfile},
        vehicle_service,
    },
};

fn order_not_found() -> AppError {
    AppError::NotFound("Order not found".to_string())
}

// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderRequest>,
) -> AppResult<Response> {
    let order = order_service::create_order(&state, input).await?;
    Ok((StatusCode::CREATED, Json(order)).into_response())
}

// GET /api/orders
pub async fn get_all_orders(State(state): State<AppState>) -> AppResult<Response> {
    let orders = order_service::list_orders(&state).await?;
    Ok(Json(orders).into_response())
}

// GET /api/orders/:id
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let order = order_service::get_order(&state, &id)
        .await?
        .ok_or_else(order_not_found)?;
    Ok(Json(order).into_response())
}

// GET /api/orders/user/:user_id
pub async fn get_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Response> {
    let orders = order_service::list_orders_by_customer(&state, &user_id).await?;
    Ok(Json(orders).into_response())
}

// PUT/PATCH /api/orders/:id
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateOrder>,
) -> AppResult<Response> {
    let order = order_service::update_order(&state, &id, patch)
        .await?
        .ok_or_else(order_not_found)?;
    Ok(Json(order).into_response())
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
    pub description: Option<String>,
}

// PATCH /api/orders/:id/status
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> AppResult<Response> {
    let order =
        order_service::update_order_status(&state, &id, body.status, body.description.as_deref())
            .await?
            .ok_or_else(order_not_found)?;
    Ok(Json(order).into_response())
}

// POST /api/orders/payment
pub async fn process_payment(
    State(state): State<AppState>,
    Json(update): Json<PaymentUpdate>,
) -> AppResult<Response> {
    let order = order_service::process_payment(&state, update)
        .await?
        .ok_or_else(order_not_found)?;
    Ok(Json(order).into_response())
}

// GET /api/orders/payment/:order_id
pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Response> {
    let status = order_service::get_payment_status(&state, &order_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment status not found".to_string()))?;
    Ok(Json(status).into_response())
}

// POST /api/orders/refund/:order_id
pub async fn process_refund(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Response> {
    let order = order_service::process_refund(&state, &order_id)
        .await?
        .ok_or_else(order_not_found)?;
    Ok(Json(order).into_response())
}

// DELETE /api/orders/:id
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if !order_service::delete_order(&state, &id).await? {
        return Err(order_not_found());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub distance: f64,
    pub vehicle_id: Option<String>,
    pub delivery_type: crate::models::DeliveryType,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub quote: shipping_service::ShippingQuote,
    pub estimated_time: String,
}

// POST /api/shipping/estimate
pub async fn estimate_shipping(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> AppResult<Response> {
    if !req.distance.is_finite() || req.distance < 0.0 {
        return Err(AppError::Validation(
            "Distance must be a non-negative number".to_string(),
        ));
    }

    let profile = match &req.vehicle_id {
        Some(id) => vehicle_service::get_vehicle(&state, id)
            .await?
            .map(|v| VehicleProfile::from(&v)),
        None => None,
    };

    let quote = shipping_service::compute_shipping_cost(
        req.distance,
        profile.as_ref(),
        req.delivery_type,
        &req.items,
    )?;
    let estimated_time =
        shipping_service::estimate_delivery_time(req.delivery_type, quote.effective_distance);

    Ok(Json(EstimateResponse {
        quote,
        estimated_time,
    })
    .into_response())
}
