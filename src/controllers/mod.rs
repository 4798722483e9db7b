pub mod active_order_controller;
pub mod home_controller;
pub mod order_controller;
pub mod vehicle_controller;
