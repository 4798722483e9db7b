use axum::{
    Router,
    routing::{get, patch},
};

use crate::{AppState, controllers::vehicle_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/vehicles",
            get(vehicle_controller::get_vehicles).post(vehicle_controller::create_vehicle),
        )
        .route(
            "/vehicles/:id",
            get(vehicle_controller::get_vehicle_by_id)
                .put(vehicle_controller::update_vehicle)
                .delete(vehicle_controller::delete_vehicle),
        )
        .route(
            "/vehicles/:id/availability",
            patch(vehicle_controller::toggle_availability),
        )
        .route(
            "/vehicles/:id/active",
            patch(vehicle_controller::toggle_active),
        )
}
