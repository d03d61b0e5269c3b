//! Stockroom - Order Management Backend
//!
//! A small order-management service over PostgreSQL:
//!
//! - [`catalog`] - Product catalog CRUD (name uniqueness, price/stock constraints)
//! - [`orders`] - Order placement with atomic stock decrement, status updates
//! - [`gateway`] - HTTP API (axum) mapping requests onto the two services
//! - [`db`] - Connection pool and schema bootstrap
//! - [`config`] - YAML application configuration
//! - [`logging`] - Rolling file logging setup

pub mod catalog;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use catalog::{CatalogError, Product, ProductDraft, ProductRepository};
pub use db::Database;
pub use orders::{Order, OrderDraft, OrderError, OrderItem, OrderItemDraft, OrderRepository};
