use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{CreateVehicleRequest, UpdateVehicle, VehicleFilter},
    services::vehicle_service,
};

fn vehicle_not_found() -> AppError {
    AppError::NotFound("Vehicle not found".to_string())
}

// POST /api/vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicleRequest>,
) -> AppResult<Response> {
    let vehicle = vehicle_service::create_vehicle(&state, input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)).into_response())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListQuery {
    pub is_available: Option<bool>,
    pub is_active: Option<bool>,
}

// GET /api/vehicles
pub async fn get_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> AppResult<Response> {
    let vehicles = vehicle_service::list_vehicles(
        &state,
        VehicleFilter {
            is_available: query.is_available,
            is_active: query.is_active,
        },
    )
    .await?;
    Ok(Json(vehicles).into_response())
}

// GET /api/vehicles/:id
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let vehicle = vehicle_service::get_vehicle(&state, &id)
        .await?
        .ok_or_else(vehicle_not_found)?;
    Ok(Json(vehicle).into_response())
}

// PUT /api/vehicles/:id
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateVehicle>,
) -> AppResult<Response> {
    let vehicle = vehicle_service::update_vehicle(&state, &id, patch)
        .await?
        .ok_or_else(vehicle_not_found)?;
    Ok(Json(vehicle).into_response())
}

// DELETE /api/vehicles/:id
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if !vehicle_service::delete_vehicle(&state, &id).await? {
        return Err(vehicle_not_found());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

// PATCH /api/vehicles/:id/availability
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let vehicle = vehicle_service::toggle_availability(&state, &id)
        .await?
        .ok_or_else(vehicle_not_found)?;
    Ok(Json(vehicle).into_response())
}

// PATCH /api/vehicles/:id/active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let vehicle = vehicle_service::toggle_active(&state, &id)
        .await?
        .ok_or_else(vehicle_not_found)?;
    Ok(Json(vehicle).into_response())
}
