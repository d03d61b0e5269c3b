//! Product catalog: models, repository and HTTP handlers
//!
//! Enforces name uniqueness and the `price > 0` / `stock >= 0` invariants.
//! Stock mutation during order placement lives in [`crate::orders`].

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

pub use error::CatalogError;
pub use models::{Product, ProductDraft};
pub use repository::ProductRepository;
