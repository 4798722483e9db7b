use chrono::Utc;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::ActiveOrder,
};

/// Default lifetime of an active order: 24 hours.
pub const DEFAULT_TTL_SECONDS: u64 = 86_400;

pub async fn store_active_order(
    state: &AppState,
    user_id: &str,
    mut order: ActiveOrder,
    ttl_seconds: Option<u64>,
) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("User ID is required".to_string()));
    }
    if order.order_id.trim().is_empty() {
        return Err(AppError::Validation("Order ID is required".to_string()));
    }
    if order.driver_id.trim().is_empty() {
        return Err(AppError::Validation("Driver ID is required".to_string()));
    }

    order.user_id = user_id.to_string();
    if order.timestamp == 0 {
        order.timestamp = Utc::now().timestamp_millis();
    }

    let ttl = ttl_seconds.unwrap_or(DEFAULT_TTL_SECONDS);
    state.active_orders.set(user_id, &order, ttl).await?;

    tracing::info!(user_id, order_id = %order.order_id, ttl, "active order stored");
    Ok(())
}

pub async fn get_active_order(state: &AppState, user_id: &str) -> AppResult<Option<ActiveOrder>> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("User ID is required".to_string()));
    }
    state.active_orders.get(user_id).await
}

/// Idempotent: removing an absent record is not an error.
pub async fn remove_active_order(state: &AppState, user_id: &str) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("User ID is required".to_string()));
    }
    state.active_orders.remove(user_id).await
}
