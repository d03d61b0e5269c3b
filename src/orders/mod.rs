//! Order service: models, repository and HTTP handlers
//!
//! The core invariant lives here: placing an order validates product
//! references and stock, inserts the order plus its items, and decrements
//! product stock, all inside one database transaction. Either everything
//! commits or nothing does.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

pub use error::OrderError;
pub use models::{DEFAULT_STATUS, Order, OrderDraft, OrderItem, OrderItemDraft};
pub use repository::OrderRepository;
