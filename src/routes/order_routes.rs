use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{AppState, controllers::order_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/orders",
            post(order_controller::create_order).get(order_controller::get_all_orders),
        )
        .route(
            "/orders/:id",
            get(order_controller::get_order_by_id)
                .put(order_controller::update_order)
                .patch(order_controller::update_order)
                .delete(order_controller::delete_order),
        )
        .route(
            "/orders/user/:user_id",
            get(order_controller::get_orders_by_user),
        )
        .route(
            "/orders/:id/status",
            patch(order_controller::update_order_status),
        )
        .route("/orders/payment", post(order_controller::process_payment))
        .route(
            "/orders/payment/:order_id",
            get(order_controller::get_payment_status),
        )
        .route(
            "/orders/refund/:order_id",
            post(order_controller::process_refund),
        )
        .route("/shipping/estimate", post(order_controller::estimate_shipping))
}
