use axum::{Router, middleware::from_fn_with_state, routing::get};

use crate::{AppState, auth, controllers::active_order_controller};

pub fn add_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route(
        "/active-orders/:user_id",
        get(active_order_controller::get_active_order)
            .post(active_order_controller::store_active_order)
            .delete(active_order_controller::remove_active_order)
            .route_layer(from_fn_with_state(state, auth::require_auth)),
    )
}
