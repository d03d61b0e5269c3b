use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Product with id {0} not found")]
    NotFound(i64),

    #[error("Product with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
