use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{
        Address, DeliveryType, NewOrder, Order, OrderStatus, PaymentMethod, PaymentStatus,
        PaymentUpdate, UpdateOrder,
    },
};

/// Creation input. The price breakdown arrives precomputed (the caller runs
/// the shipping calculator first); this service only assembles and persists
/// the aggregate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub driver_id: Option<String>,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub price: f64,
    pub base_price: f64,
    pub delivery_price: f64,
    pub commission: f64,
    pub gst_amount: f64,
    pub distance: f64,
    pub estimated_time: String,
    pub delivery_type: DeliveryType,
    pub payment_method: PaymentMethod,
    pub pickup_address: Address,
    pub dropoff_address: Address,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusView {
    pub order_id: String,
    pub payment_status: PaymentStatus,
    pub amount: f64,
}

pub async fn create_order(state: &AppState, input: CreateOrderRequest) -> AppResult<Order> {
    if input.user_id.trim().is_empty() {
        return Err(AppError::Validation("User ID is required".to_string()));
    }
    if input.vehicle_id.trim().is_empty() {
        return Err(AppError::Validation("Vehicle ID is required".to_string()));
    }

    let order = state
        .orders
        .create(NewOrder {
            customer_id: input.user_id,
            driver_id: input.driver_id,
            vehicle_id: input.vehicle_id,
            vehicle_name: input.vehicle_name,
            base_price: input.base_price,
            delivery_price: input.delivery_price,
            commission: input.commission,
            gst: input.gst_amount,
            total_amount: input.price,
            distance: input.distance,
            estimated_time: input.estimated_time,
            delivery_type: input.delivery_type,
            payment_method: input.payment_method,
            status: OrderStatus::Pending,
            pickup_address: input.pickup_address,
            dropoff_address: input.dropoff_address,
        })
        .await?;

    tracing::info!(order_id = %order.id, customer_id = %order.customer_id, "order created");
    Ok(order)
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<Option<Order>> {
    state.orders.find_by_id(id).await
}

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    state.orders.find_all().await
}

pub async fn list_orders_by_customer(state: &AppState, customer_id: &str) -> AppResult<Vec<Order>> {
    state.orders.find_by_customer(customer_id).await
}

pub async fn update_order(
    state: &AppState,
    id: &str,
    patch: UpdateOrder,
) -> AppResult<Option<Order>> {
    state.orders.update(id, patch).await
}

pub async fn update_order_status(
    state: &AppState,
    id: &str,
    new_status: OrderStatus,
    description: Option<&str>,
) -> AppResult<Option<Order>> {
    let Some(mut order) = state.orders.find_by_id(id).await? else {
        return Ok(None);
    };

    order.apply_status(new_status, description, Utc::now().timestamp());
    let order = state.orders.save(order).await?;

    tracing::info!(order_id = %order.id, status = new_status.as_str(), "order status updated");
    Ok(Some(order))
}

pub async fn process_payment(
    state: &AppState,
    update: PaymentUpdate,
) -> AppResult<Option<Order>> {
    let Some(mut order) = state.orders.find_by_id(&update.order_id).await? else {
        return Ok(None);
    };

    order.apply_payment(&update, Utc::now().timestamp());
    let order = state.orders.save(order).await?;

    tracing::info!(order_id = %order.id, payment_status = ?update.status, "payment processed");
    Ok(Some(order))
}

pub async fn get_payment_status(
    state: &AppState,
    order_id: &str,
) -> AppResult<Option<PaymentStatusView>> {
    let Some(order) = state.orders.find_by_id(order_id).await? else {
        return Ok(None);
    };

    Ok(order.payment.as_ref().map(|payment| PaymentStatusView {
        order_id: order.id.clone(),
        payment_status: payment.status,
        amount: payment.amount,
    }))
}

pub async fn process_refund(state: &AppState, order_id: &str) -> AppResult<Option<Order>> {
    let Some(mut order) = state.orders.find_by_id(order_id).await? else {
        return Ok(None);
    };

    // A rejected refund never reaches the store.
    order.apply_refund(Utc::now().timestamp())?;
    let order = state.orders.save(order).await?;

    tracing::info!(order_id = %order.id, "refund processed");
    Ok(Some(order))
}

pub async fn delete_order(state: &AppState, id: &str) -> AppResult<bool> {
    let deleted = state.orders.delete(id).await?;
    if deleted {
        tracing::info!(order_id = id, "order deleted");
    }
    Ok(deleted)
}
