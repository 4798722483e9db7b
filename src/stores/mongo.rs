use async_trait::async_trait;
use chrono::Utc;
use futures_util::StreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database};

use crate::{
    error::AppResult,
    models::{
        NewOrder, NewVehicle, Order, UpdateOrder, UpdateVehicle, Vehicle, VehicleFilter,
    },
    stores::{OrderStore, VehicleStore},
};

// Ids are ObjectId hex strings. Anything that does not parse as one can
// never match a stored document, so it short-circuits to "not found".
fn valid_id(id: &str) -> bool {
    ObjectId::parse_str(id).is_ok()
}

#[derive(Clone)]
pub struct MongoOrderStore {
    orders: Collection<Order>,
}

impl MongoOrderStore {
    pub fn new(db: &Database) -> Self {
        Self {
            orders: db.collection::<Order>("orders"),
        }
    }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
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

        self.orders.insert_one(&order, None).await?;
        Ok(order)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>> {
        if !valid_id(id) {
            return Ok(None);
        }
        Ok(self.orders.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_by_customer(&self, customer_id: &str) -> AppResult<Vec<Order>> {
        let find_opts = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let mut cursor = self
            .orders
            .find(doc! { "customerId": customer_id }, find_opts)
            .await?;

        let mut items: Vec<Order> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res?);
        }
        Ok(items)
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let find_opts = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let mut cursor = self.orders.find(None, find_opts).await?;

        let mut items: Vec<Order> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res?);
        }
        Ok(items)
    }

    async fn update(&self, id: &str, patch: UpdateOrder) -> AppResult<Option<Order>> {
        if !valid_id(id) {
            return Ok(None);
        }

        // Absent fields are skipped during serialization, so the $set only
        // carries what the caller supplied.
        let mut fields = bson::to_document(&patch)?;
        fields.insert("updatedAt", Utc::now().timestamp());

        let opts = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .orders
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields }, opts)
            .await?)
    }

    async fn save(&self, mut order: Order) -> AppResult<Order> {
        order.updated_at = Utc::now().timestamp();
        self.orders
            .replace_one(doc! { "_id": &order.id }, &order, None)
            .await?;
        Ok(order)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        if !valid_id(id) {
            return Ok(false);
        }
        let result = self.orders.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }
}

#[derive(Clone)]
pub struct MongoVehicleStore {
    vehicles: Collection<Vehicle>,
}

impl MongoVehicleStore {
    pub fn new(db: &Database) -> Self {
        Self {
            vehicles: db.collection::<Vehicle>("vehicles"),
        }
    }
}

#[async_trait]
impl VehicleStore for MongoVehicleStore {
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

        self.vehicles.insert_one(&vehicle, None).await?;
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        if !valid_id(id) {
            return Ok(None);
        }
        Ok(self.vehicles.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_all(&self, filter: VehicleFilter) -> AppResult<Vec<Vehicle>> {
        let mut query = doc! {};
        if let Some(is_available) = filter.is_available {
            query.insert("isAvailable", is_available);
        }
        if let Some(is_active) = filter.is_active {
            query.insert("isActive", is_active);
        }

        let find_opts = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let mut cursor = self.vehicles.find(query, find_opts).await?;

        let mut items: Vec<Vehicle> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res?);
        }
        Ok(items)
    }

    async fn update(&self, id: &str, patch: UpdateVehicle) -> AppResult<Option<Vehicle>> {
        if !valid_id(id) {
            return Ok(None);
        }

        let mut fields = bson::to_document(&patch)?;
        fields.insert("updatedAt", Utc::now().timestamp());

        let opts = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .vehicles
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields }, opts)
            .await?)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        if !valid_id(id) {
            return Ok(false);
        }
        let result = self.vehicles.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }
}
