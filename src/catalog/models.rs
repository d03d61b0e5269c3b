//! Product data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::CatalogError;

/// A catalog product as stored in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    pub description: Option<String>,
    /// Unit price, must be positive
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
    /// Units on hand, never negative
    #[schema(example = 5)]
    pub stock: i32,
}

/// Input for creating a product or fully replacing an existing one.
///
/// Update has full-replace semantics: every field is overwritten, so callers
/// must supply current values for fields they are not changing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductDraft {
    #[schema(example = "Widget")]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "10.00")]
    pub price: Decimal,
    #[schema(example = 5)]
    pub stock: i32,
}

impl ProductDraft {
    /// Validate the input-shape invariants before touching storage
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }
        if self.price <= Decimal::ZERO {
            return Err(CatalogError::InvalidInput(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        if self.stock < 0 {
            return Err(CatalogError::InvalidInput(format!(
                "stock must be non-negative, got {}",
                self.stock
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, stock: i32) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: None,
            price: price.parse().unwrap(),
            stock,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft("Widget", "10.00", 5).validate().is_ok());
        assert!(draft("Widget", "0.01", 0).validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = draft("", "10.00", 5).validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));

        let err = draft("   ", "10.00", 5).validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let err = draft("Widget", "0", 5).validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));

        let err = draft("Widget", "-1.50", 5).validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let err = draft("Widget", "10.00", -1).validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn test_price_precision_preserved() {
        // Decimal, not f64: "19.99" must round-trip exactly
        let d: Decimal = "19.99".parse().unwrap();
        assert_eq!(d.to_string(), "19.99");
    }
}
