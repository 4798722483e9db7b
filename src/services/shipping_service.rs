//! Shipping cost and delivery time calculation. Pure functions, no I/O.

use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{DeliveryType, OrderItem, Vehicle},
};

const DEFAULT_PRICE_PER_KM: f64 = 15.0;
// Minimum billable distance in km.
const DEFAULT_MINIMUM_DISTANCE: f64 = 3.0;
const COMMISSION_RATE: f64 = 0.05;
const GST_RATE: f64 = 0.18;
const DELIVERY_FEE_RATE: f64 = 0.1;
const EXPRESS_DELIVERY_MULTIPLIER: f64 = 1.5;
const BASE_MINUTES_PER_KM: f64 = 5.0;
// Express delivery is 30% faster.
const EXPRESS_TIME_MULTIPLIER: f64 = 0.7;

/// The pricing-relevant slice of a vehicle. Absent fields fall back to the
/// service-wide defaults.
#[derive(Debug, Clone, Default)]
pub struct VehicleProfile {
    pub price_per_km: Option<f64>,
    pub minimum_distance: Option<f64>,
    pub max_weight: Option<f64>,
}

impl From<&Vehicle> for VehicleProfile {
    fn from(vehicle: &Vehicle) -> Self {
        VehicleProfile {
            price_per_km: vehicle.price_per_km,
            minimum_distance: None,
            max_weight: vehicle.max_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub price: f64,
    pub base_price: f64,
    pub delivery_price: f64,
    pub commission: f64,
    pub gst_amount: f64,
    pub effective_distance: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Price breakdown for a trip. Internal math runs at full precision; only
/// the returned fields are rounded to 2 decimals, so the derived amounts do
/// not compound rounding error.
pub fn compute_shipping_cost(
    distance: f64,
    vehicle: Option<&VehicleProfile>,
    delivery_type: DeliveryType,
    items: &[OrderItem],
) -> AppResult<ShippingQuote> {
    let price_per_km = vehicle
        .and_then(|v| v.price_per_km)
        .unwrap_or(DEFAULT_PRICE_PER_KM);
    let minimum_distance = vehicle
        .and_then(|v| v.minimum_distance)
        .unwrap_or(DEFAULT_MINIMUM_DISTANCE);

    let total_weight: f64 = items.iter().map(|item| item.weight).sum();
    if let Some(max_weight) = vehicle.and_then(|v| v.max_weight) {
        if total_weight > max_weight {
            return Err(AppError::CapacityExceeded(max_weight));
        }
    }

    let effective_distance = distance.max(minimum_distance);
    let base_price = effective_distance * price_per_km;

    let delivery_multiplier = match delivery_type {
        DeliveryType::Normal => 1.0,
        DeliveryType::Express => EXPRESS_DELIVERY_MULTIPLIER,
    };
    let delivery_price = base_price * DELIVERY_FEE_RATE * delivery_multiplier;

    let commission = base_price * COMMISSION_RATE;
    let subtotal = base_price + delivery_price + commission;
    let gst_amount = subtotal * GST_RATE;
    let price = subtotal + gst_amount;

    Ok(ShippingQuote {
        price: round2(price),
        base_price: round2(base_price),
        delivery_price: round2(delivery_price),
        commission: round2(commission),
        gst_amount: round2(gst_amount),
        effective_distance,
    })
}

/// Human-readable delivery estimate for the effective (billable) distance.
pub fn estimate_delivery_time(delivery_type: DeliveryType, effective_distance: f64) -> String {
    let base_minutes = effective_distance * BASE_MINUTES_PER_KM;
    let minutes = match delivery_type {
        DeliveryType::Normal => base_minutes,
        DeliveryType::Express => base_minutes * EXPRESS_TIME_MULTIPLIER,
    };

    if minutes < 60.0 {
        return format!("{} mins", minutes.ceil() as i64);
    }

    let hours = (minutes / 60.0).floor() as i64;
    let mins = (minutes % 60.0).ceil() as i64;
    let hr = if hours > 1 { "hrs" } else { "hr" };
    if mins > 0 {
        format!("{hours} {hr} {mins} mins")
    } else {
        format!("{hours} {hr}")
    }
}
