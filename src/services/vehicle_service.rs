use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{CreateVehicleRequest, NewVehicle, UpdateVehicle, Vehicle, VehicleFilter},
};

pub async fn create_vehicle(state: &AppState, input: CreateVehicleRequest) -> AppResult<Vehicle> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Vehicle name is required".to_string()));
    }

    let vehicle = state
        .vehicles
        .create(NewVehicle {
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            is_available: input.is_available.unwrap_or(true),
            is_active: input.is_active.unwrap_or(true),
            max_weight: input.max_weight,
            price_per_km: input.price_per_km,
        })
        .await?;

    tracing::info!(vehicle_id = %vehicle.id, name = %vehicle.name, "vehicle created");
    Ok(vehicle)
}

pub async fn get_vehicle(state: &AppState, id: &str) -> AppResult<Option<Vehicle>> {
    state.vehicles.find_by_id(id).await
}

pub async fn list_vehicles(state: &AppState, filter: VehicleFilter) -> AppResult<Vec<Vehicle>> {
    state.vehicles.find_all(filter).await
}

pub async fn update_vehicle(
    state: &AppState,
    id: &str,
    patch: UpdateVehicle,
) -> AppResult<Option<Vehicle>> {
    state.vehicles.update(id, patch).await
}

pub async fn delete_vehicle(state: &AppState, id: &str) -> AppResult<bool> {
    state.vehicles.delete(id).await
}

pub async fn toggle_availability(state: &AppState, id: &str) -> AppResult<Option<Vehicle>> {
    let Some(vehicle) = state.vehicles.find_by_id(id).await? else {
        return Ok(None);
    };

    let patch = UpdateVehicle {
        is_available: Some(!vehicle.is_available),
        ..UpdateVehicle::default()
    };
    state.vehicles.update(id, patch).await
}

pub async fn toggle_active(state: &AppState, id: &str) -> AppResult<Option<Vehicle>> {
    let Some(vehicle) = state.vehicles.find_by_id(id).await? else {
        return Ok(None);
    };

    let patch = UpdateVehicle {
        is_active: Some(!vehicle.is_active),
        ..UpdateVehicle::default()
    };
    state.vehicles.update(id, patch).await
}
