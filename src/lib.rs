//! Library entrypoint for the delivery-orders service.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services
//! and plug in their own store implementations).

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;

#[path = "middleware/auth.rs"]
pub mod auth;

pub mod services;
pub mod stores;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub auth: services::auth_client::AuthClient,
    pub orders: Arc<dyn stores::OrderStore>,
    pub vehicles: Arc<dyn stores::VehicleStore>,
    pub active_orders: Arc<dyn stores::ActiveOrderStore>,
}
