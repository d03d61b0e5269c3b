use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Order with id {0} not found")]
    NotFound(i64),

    #[error("Product with id {0} not found")]
    ProductNotFound(i64),

    #[error("Not enough stock for product id {0}")]
    InsufficientStock(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
