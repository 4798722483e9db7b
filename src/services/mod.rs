pub mod auth_client;

pub mod active_order_service;
pub mod order_service;
pub mod shipping_service;
pub mod vehicle_service;
