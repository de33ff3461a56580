use crate::error::AppError;
use crate::model::{NewOrder, Order};
use crate::store::{OrderStore, ProductStore};
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderStore>, products: Arc<dyn ProductStore>) -> Self {
        Self { orders, products }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Order>, AppError> {
        self.orders.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Order, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".into()))
    }

    /// Place an order for an existing product, stamped with the current time.
    /// The store re-checks the reference atomically with the insert.
    #[instrument(skip(self, customer_name))]
    pub async fn create(&self, customer_name: &str, quantity: i64, product_id: i64) -> Result<Order, AppError> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(AppError::InvalidReference("Product not found".into()));
        }
        let order = self
            .orders
            .create(NewOrder {
                customer_name: customer_name.to_string(),
                quantity,
                product_id,
                // TIMESTAMPTZ keeps microseconds
                order_date: Utc::now().trunc_subsecs(6),
            })
            .await?;
        tracing::info!(order_id = order.id, product_id, "order created");
        Ok(order)
    }
}
