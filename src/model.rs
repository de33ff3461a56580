//! Persisted entities and the product delete policy.

use crate::error::ConfigError;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// An order with its product resolved. `product` is `None` only when the
/// referenced product was deleted under [`DeletePolicy::Orphan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub quantity: i64,
    pub order_date: DateTime<Utc>,
    pub product: Option<Product>,
}

/// Order values handed to the store for insertion.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub quantity: i64,
    pub product_id: i64,
    pub order_date: DateTime<Utc>,
}

/// Row shape of `orders LEFT JOIN product`.
#[derive(Debug, FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub customer_name: String,
    pub quantity: i64,
    pub order_date: DateTime<Utc>,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub product_price: Option<f64>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        let product = match (row.product_id, row.product_name, row.product_price) {
            (Some(id), Some(name), Some(price)) => Some(Product { id, name, price }),
            _ => None,
        };
        Order {
            id: row.id,
            customer_name: row.customer_name,
            quantity: row.quantity,
            order_date: row.order_date,
            product,
        }
    }
}

/// What happens to orders referencing a product that is being deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Delete the product; referencing orders keep existing without a product.
    #[default]
    Orphan,
    /// Refuse to delete a product that any order references.
    Reject,
    /// Delete referencing orders together with the product.
    Cascade,
}

impl std::str::FromStr for DeletePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "orphan" => Ok(DeletePolicy::Orphan),
            "reject" => Ok(DeletePolicy::Reject),
            "cascade" => Ok(DeletePolicy::Cascade),
            _ => Err(ConfigError::Invalid {
                key: "PRODUCT_DELETE_POLICY",
                message: format!("{} (expected orphan, reject or cascade)", s),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product_id: Option<i64>) -> OrderRow {
        OrderRow {
            id: 7,
            customer_name: "Alice".into(),
            quantity: 3,
            order_date: Utc::now(),
            product_id,
            product_name: product_id.map(|_| "Widget".to_string()),
            product_price: product_id.map(|_| 9.99),
        }
    }

    #[test]
    fn joined_row_resolves_product() {
        let order = Order::from(row(Some(1)));
        assert_eq!(
            order.product,
            Some(Product {
                id: 1,
                name: "Widget".into(),
                price: 9.99
            })
        );
    }

    #[test]
    fn row_without_product_has_no_product() {
        let order = Order::from(row(None));
        assert_eq!(order.id, 7);
        assert!(order.product.is_none());
    }

    #[test]
    fn delete_policy_parses_case_insensitively() {
        assert_eq!("Reject".parse::<DeletePolicy>().unwrap(), DeletePolicy::Reject);
        assert_eq!(" cascade ".parse::<DeletePolicy>().unwrap(), DeletePolicy::Cascade);
        assert_eq!("orphan".parse::<DeletePolicy>().unwrap(), DeletePolicy::Orphan);
        assert!("restrict".parse::<DeletePolicy>().is_err());
    }
}
