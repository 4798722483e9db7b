use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Razorpay,
    Wallet,
    Cash,
    Upi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    NotRequired,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Normal,
    Express,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    OrderPlaced,
    PaymentConfirmed,
    PaymentFailed,
    OrderConfirmed,
    PickupAssigned,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    DeliveryFailed,
    Cancelled,
    RefundProcessed,
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::OrderPlaced => "order_placed",
            TrackingStatus::PaymentConfirmed => "payment_confirmed",
            TrackingStatus::PaymentFailed => "payment_failed",
            TrackingStatus::OrderConfirmed => "order_confirmed",
            TrackingStatus::PickupAssigned => "pickup_assigned",
            TrackingStatus::PickedUp => "picked_up",
            TrackingStatus::InTransit => "in_transit",
            TrackingStatus::OutForDelivery => "out_for_delivery",
            TrackingStatus::Delivered => "delivered",
            TrackingStatus::DeliveryFailed => "delivery_failed",
            TrackingStatus::Cancelled => "cancelled",
            TrackingStatus::RefundProcessed => "refund_processed",
        }
    }
}

// The order-level status is coarser than the tracking lifecycle; when a
// status update has to be mirrored into an existing tracking record, it is
// mapped onto the closest lifecycle stage.
impl From<OrderStatus> for TrackingStatus {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => TrackingStatus::OrderPlaced,
            OrderStatus::Processing => TrackingStatus::OrderConfirmed,
            OrderStatus::Shipped => TrackingStatus::InTransit,
            OrderStatus::Delivered => TrackingStatus::Delivered,
            OrderStatus::Cancelled => TrackingStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Pricing input: what is being shipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// One entry in the append-only tracking log. The status is recorded as the
/// raw string that was appended (payment events use tracking-status values,
/// order status updates record the order status itself).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub status: String,
    pub timestamp: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracking {
    pub status: TrackingStatus,
    pub history: Vec<TrackingEvent>,
}

impl Tracking {
    fn placed() -> Self {
        Tracking {
            status: TrackingStatus::OrderPlaced,
            history: Vec::new(),
        }
    }
}

/// The order aggregate: the durable record plus its optional payment and
/// tracking sub-records, treated as one consistency unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub base_price: f64,
    pub delivery_price: f64,
    pub commission: f64,
    pub gst: f64,
    pub total_amount: f64,
    pub distance: f64,
    pub estimated_time: String,
    pub delivery_type: DeliveryType,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub pickup_address: Address,
    pub dropoff_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Order fields as handed to the store on creation; the store assigns the
/// id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: String,
    pub driver_id: Option<String>,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub base_price: f64,
    pub delivery_price: f64,
    pub commission: f64,
    pub gst: f64,
    pub total_amount: f64,
    pub distance: f64,
    pub estimated_time: String,
    pub delivery_type: DeliveryType,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub pickup_address: Address,
    pub dropoff_address: Address,
}

/// Partial update merged into a persisted order. Monetary consistency is the
/// caller's responsibility here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_address: Option<Address>,
}

/// Incoming payment result for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    pub order_id: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

// State machine for the order aggregate. These methods mutate the aggregate
// in memory only; persisting the result is the caller's job, so a failed
// transition never leaves a half-written record behind.
impl Order {
    /// Record a payment result. Creates the payment sub-record if missing,
    /// otherwise updates it in place. A `paid` result moves the order to
    /// PROCESSING and confirms tracking; a `failed` result only appends to
    /// the tracking history.
    pub fn apply_payment(&mut self, update: &PaymentUpdate, now: i64) {
        match &mut self.payment {
            Some(payment) => {
                payment.method = update.method;
                payment.status = update.status;
                payment.amount = update.amount;
                if let Some(txn) = &update.transaction_id {
                    payment.transaction_id = Some(txn.clone());
                }
            }
            None => {
                self.payment = Some(Payment {
                    amount: update.amount,
                    method: update.method,
                    status: update.status,
                    transaction_id: update.transaction_id.clone(),
                });
            }
        }

        let tracking = self.tracking.get_or_insert_with(Tracking::placed);

        match update.status {
            PaymentStatus::Paid => {
                self.status = OrderStatus::Processing;
                tracking.status = TrackingStatus::PaymentConfirmed;
                tracking.history.push(TrackingEvent {
                    status: TrackingStatus::PaymentConfirmed.as_str().to_string(),
                    timestamp: now,
                    description: "Payment received and confirmed".to_string(),
                });
            }
            PaymentStatus::Failed => {
                // The tracking status itself stays put; only the log records
                // the failed attempt.
                tracking.history.push(TrackingEvent {
                    status: TrackingStatus::PaymentFailed.as_str().to_string(),
                    timestamp: now,
                    description: "Payment failed, please try again".to_string(),
                });
            }
            _ => {}
        }
    }

    /// Set the order status unconditionally. Tracking is mirrored and the
    /// history extended only when a tracking record already exists.
    pub fn apply_status(&mut self, new_status: OrderStatus, description: Option<&str>, now: i64) {
        self.status = new_status;

        if let Some(tracking) = &mut self.tracking {
            tracking.status = TrackingStatus::from(new_status);
            let description = description
                .map(str::to_string)
                .unwrap_or_else(|| format!("Order status updated to {}", new_status.as_str()));
            tracking.history.push(TrackingEvent {
                status: new_status.as_str().to_string(),
                timestamp: now,
                description,
            });
        }
    }

    /// Refund a paid order. Fails without touching the aggregate unless a
    /// payment sub-record exists with status `paid`.
    pub fn apply_refund(&mut self, now: i64) -> Result<(), AppError> {
        match &mut self.payment {
            Some(payment) if payment.status == PaymentStatus::Paid => {
                payment.status = PaymentStatus::Refunded;
            }
            _ => {
                return Err(AppError::DomainRule(
                    "Cannot refund an unpaid order".to_string(),
                ));
            }
        }

        let tracking = self.tracking.get_or_insert_with(Tracking::placed);
        tracking.status = TrackingStatus::RefundProcessed;
        tracking.history.push(TrackingEvent {
            status: TrackingStatus::RefundProcessed.as_str().to_string(),
            timestamp: now,
            description: "Refund processed successfully".to_string(),
        });

        self.status = OrderStatus::Cancelled;
        Ok(())
    }
}
