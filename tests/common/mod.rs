#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use delivery_orders::{
    AppState, config,
    error::AppResult,
    models::{
        ActiveOrder, NewOrder, NewVehicle, Order, UpdateOrder, UpdateVehicle, Vehicle,
        VehicleFilter,
    },
    services::auth_client::AuthClient,
    stores::{ActiveOrderStore, OrderStore, VehicleStore},
};

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Order>>,
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> AppResult<Order> {
        let now = Utc::now().timestamp();
        let order = Order {
            id: ObjectId::new().to_hex(),
            customer_id: order.customer_id,
            driver_id: order.driver_id,
            vehicle_id: order.vehicle_id,
            vehicle_name: order.vehicle_name,
            base_price: order.base_price,
            delivery_price: order.delivery_price,
            commission: order.commission,
            gst: order.gst,
            total_amount: order.total_amount,
            distance: order.distance,
            estimated_time: order.estimated_time,
            delivery_type: order.delivery_type,
            payment_method: order.payment_method,
            status: order.status,
            pickup_address: order.pickup_address,
            dropoff_address: order.dropoff_address,
            payment: None,
            tracking: None,
            created_at: now,
            updated_at: now,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn find_by_customer(&self, customer_id: &str) -> AppResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn update(&self, id: &str, patch: UpdateOrder) -> AppResult<Option<Order>> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };

        if let Some(v) = patch.driver_id {
            order.driver_id = Some(v);
        }
        if let Some(v) = patch.vehicle_id {
            order.vehicle_id = v;
        }
        if let Some(v) = patch.vehicle_name {
            order.vehicle_name = v;
        }
        if let Some(v) = patch.base_price {
            order.base_price = v;
        }
        if let Some(v) = patch.delivery_price {
            order.delivery_price = v;
        }
        if let Some(v) = patch.commission {
            order.commission = v;
        }
        if let Some(v) = patch.gst {
            order.gst = v;
        }
        if let Some(v) = patch.total_amount {
            order.total_amount = v;
        }
        if let Some(v) = patch.distance {
            order.distance = v;
        }
        if let Some(v) = patch.estimated_time {
            order.estimated_time = v;
        }
        if let Some(v) = patch.delivery_type {
            order.delivery_type = v;
        }
        if let Some(v) = patch.payment_method {
            order.payment_method = v;
        }
        if let Some(v) = patch.status {
            order.status = v;
        }
        if let Some(v) = patch.pickup_address {
            order.pickup_address = v;
        }
        if let Some(v) = patch.dropoff_address {
            order.dropoff_address = v;
        }
        order.updated_at = Utc::now().timestamp();

        Ok(Some(order.clone()))
    }

    async fn save(&self, mut order: Order) -> AppResult<Order> {
        order.updated_at = Utc::now().timestamp();
        let mut orders = self.orders.lock().unwrap();
        if let Some(slot) = orders.iter_mut().find(|o| o.id == order.id) {
            *slot = order.clone();
        }
        Ok(order)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: Mutex<Vec<Vehicle>>,
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let now = Utc::now().timestamp();
        let vehicle = Vehicle {
            id: ObjectId::new().to_hex(),
            name: vehicle.name,
            description: vehicle.description,
            image_url: vehicle.image_url,
            is_available: vehicle.is_available,
            is_active: vehicle.is_active,
            max_weight: vehicle.max_weight,
            price_per_km: vehicle.price_per_km,
            created_at: now,
            updated_at: now,
        };
        self.vehicles.lock().unwrap().push(vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn find_all(&self, filter: VehicleFilter) -> AppResult<Vec<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| filter.is_available.is_none_or(|want| v.is_available == want))
            .filter(|v| filter.is_active.is_none_or(|want| v.is_active == want))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, patch: UpdateVehicle) -> AppResult<Option<Vehicle>> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let Some(vehicle) = vehicles.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };

        if let Some(v) = patch.name {
            vehicle.name = v;
        }
        if let Some(v) = patch.description {
            vehicle.description = Some(v);
        }
        if let Some(v) = patch.image_url {
            vehicle.image_url = Some(v);
        }
        if let Some(v) = patch.is_available {
            vehicle.is_available = v;
        }
        if let Some(v) = patch.is_active {
            vehicle.is_active = v;
        }
        if let Some(v) = patch.max_weight {
            vehicle.max_weight = Some(v);
        }
        if let Some(v) = patch.price_per_km {
            vehicle.price_per_km = Some(v);
        }
        vehicle.updated_at = Utc::now().timestamp();

        Ok(Some(vehicle.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut vehicles = self.vehicles.lock().unwrap();
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        Ok(vehicles.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryActiveOrderStore {
    entries: Mutex<HashMap<String, (ActiveOrder, Instant)>>,
}

#[async_trait]
impl ActiveOrderStore for InMemoryActiveOrderStore {
    async fn set(&self, user_id: &str, order: &ActiveOrder, ttl_seconds: u64) -> AppResult<()> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.entries
            .lock()
            .unwrap()
            .insert(user_id.to_string(), (order.clone(), expires_at));
        Ok(())
    }

    async fn get(&self, user_id: &str) -> AppResult<Option<ActiveOrder>> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(user_id) {
            Some((order, expires_at)) if Instant::now() < *expires_at => Ok(Some(order.clone())),
            Some(_) => {
                entries.remove(user_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, user_id: &str) -> AppResult<()> {
        self.entries.lock().unwrap().remove(user_id);
        Ok(())
    }
}

pub fn test_settings() -> config::Settings {
    config::Settings {
        mongodb_uri: "mongodb://localhost:27017".to_string(),
        mongodb_db: "delivery_test".to_string(),
        redis_url: "redis://localhost:6379".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        auth_service_url: "http://localhost:3001".to_string(),
        app_env: "development".to_string(),
    }
}

pub fn test_state() -> AppState {
    let settings = test_settings();
    AppState {
        auth: AuthClient::new(settings.auth_service_url.clone()),
        orders: Arc::new(InMemoryOrderStore::default()),
        vehicles: Arc::new(InMemoryVehicleStore::default()),
        active_orders: Arc::new(InMemoryActiveOrderStore::default()),
        settings,
    }
}
