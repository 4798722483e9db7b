use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveOrderStatus {
    #[default]
    DriverAssigned,
    DriverArrived,
    PickedUp,
    Completed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Ephemeral record of the delivery currently in flight for a user. One per
/// user, overwritten wholesale on each store, expired by the cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveOrder {
    pub user_id: String,
    pub order_id: String,
    pub driver_id: String,
    pub pickup_location: Location,
    pub drop_location: Location,
    pub status: ActiveOrderStatus,
    /// Unix millis; filled at store time when left at zero.
    pub timestamp: i64,
    pub vehicle: Option<String>,
    pub pickup_otp: String,
    pub dropoff_otp: Option<String>,
}
