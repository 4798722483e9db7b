use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{AppState, controllers::home_controller};

pub mod active_order_routes;
pub mod order_routes;
pub mod vehicle_routes;

pub fn app(state: AppState) -> Router {
    let api = Router::<AppState>::new();

    let api = order_routes::add_routes(api);
    let api = vehicle_routes::add_routes(api);
    let api = active_order_routes::add_routes(api, state.clone());

    Router::new()
        .nest("/api", api)
        .route("/health", get(home_controller::health))
        .fallback(home_controller::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
