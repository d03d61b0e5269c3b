//! Order data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::OrderError;

/// Status assigned to new orders when the caller does not supply one.
///
/// Status is a free-form string by design: any value is accepted and no
/// transition graph is enforced.
pub const DEFAULT_STATUS: &str = "processing";

/// An order with its items eagerly loaded
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    #[schema(example = 1)]
    pub id: i64,
    pub created_at: DateTime<Utc>,
    #[schema(example = "processing")]
    pub status: String,
    pub order_items: Vec<OrderItem>,
}

/// A single line of an order; immutable once created
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct OrderItem {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = 3)]
    pub quantity: i32,
}

/// Input for placing an order
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderDraft {
    /// Optional initial status; defaults to [`DEFAULT_STATUS`]
    #[schema(example = "processing")]
    pub status: Option<String>,
    pub order_items: Vec<OrderItemDraft>,
}

/// One requested order line
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderItemDraft {
    #[schema(example = 1)]
    pub product_id: i64,
    /// Requested quantity, must be positive
    #[schema(example = 3)]
    pub quantity: i32,
}

impl OrderDraft {
    /// Reject malformed quantities before any transaction is opened
    pub fn validate(&self) -> Result<(), OrderError> {
        for item in &self.order_items {
            if item.quantity <= 0 {
                return Err(OrderError::InvalidInput(format!(
                    "quantity must be positive for product id {}, got {}",
                    item.product_id, item.quantity
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(items: Vec<(i64, i32)>) -> OrderDraft {
        OrderDraft {
            status: None,
            order_items: items
                .into_iter()
                .map(|(product_id, quantity)| OrderItemDraft {
                    product_id,
                    quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft(vec![(1, 3), (2, 1)]).validate().is_ok());
    }

    #[test]
    fn test_empty_items_accepted() {
        // An order with no items is allowed; it simply reserves nothing
        assert!(draft(vec![]).validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = draft(vec![(1, 0)]).validate().unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let err = draft(vec![(1, 3), (2, -1)]).validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("product id 2"), "must identify offending item");
    }
}
