pub mod active_order;
pub mod order;
pub mod vehicle;

pub use active_order::{ActiveOrder, ActiveOrderStatus, Location};
pub use order::{
    Address, DeliveryType, NewOrder, Order, OrderItem, OrderStatus, Payment, PaymentMethod,
    PaymentStatus, PaymentUpdate, Tracking, TrackingEvent, TrackingStatus, UpdateOrder,
};
pub use vehicle::{CreateVehicleRequest, NewVehicle, UpdateVehicle, Vehicle, VehicleFilter};
