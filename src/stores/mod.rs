//! Storage collaborators. Services only see these traits; `main` wires in
//! the MongoDB and Redis implementations, tests plug in in-memory ones.

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        ActiveOrder, NewOrder, NewVehicle, Order, UpdateOrder, UpdateVehicle, Vehicle,
        VehicleFilter,
    },
};

pub mod mongo;
pub mod redis;

pub use mongo::{MongoOrderStore, MongoVehicleStore};
pub use redis::RedisActiveOrderStore;

/// Durable storage for the order aggregate. Assigns id and timestamps on
/// create and refreshes `updated_at` on every write.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> AppResult<Order>;
    /// Malformed ids are a not-found condition, never an error.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>>;
    /// Newest first.
    async fn find_by_customer(&self, customer_id: &str) -> AppResult<Vec<Order>>;
    async fn find_all(&self) -> AppResult<Vec<Order>>;
    async fn update(&self, id: &str, patch: UpdateOrder) -> AppResult<Option<Order>>;
    /// Persist a fully materialized aggregate (after a state transition).
    async fn save(&self, order: Order) -> AppResult<Order>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Expiring key-value storage for the per-user active order.
#[async_trait]
pub trait ActiveOrderStore: Send + Sync {
    async fn set(&self, user_id: &str, order: &ActiveOrder, ttl_seconds: u64) -> AppResult<()>;
    async fn get(&self, user_id: &str) -> AppResult<Option<ActiveOrder>>;
    async fn remove(&self, user_id: &str) -> AppResult<()>;
}

#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>>;
    async fn find_all(&self, filter: VehicleFilter) -> AppResult<Vec<Vehicle>>;
    async fn update(&self, id: &str, patch: UpdateVehicle) -> AppResult<Option<Vehicle>>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
