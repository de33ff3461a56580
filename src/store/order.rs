use super::{map_product_reference, OrderStore};
use crate::error::AppError;
use crate::model::{NewOrder, Order, OrderRow};
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_ORDERS: &str = r#"
    SELECT o.id, o.customer_name, o.quantity, o.order_date,
           p.id AS product_id, p.name AS product_name, p.price AS product_price
    FROM orders o
    LEFT JOIN product p ON p.id = o.product_id
"#;

#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn list_all(&self) -> Result<Vec<Order>, AppError> {
        let sql = format!("{} ORDER BY o.id", SELECT_ORDERS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, OrderRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let sql = format!("{} WHERE o.id = $1", SELECT_ORDERS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Order::from))
    }

    async fn create(&self, order: NewOrder) -> Result<Order, AppError> {
        let mut tx = self.pool.begin().await?;
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO orders (customer_name, quantity, order_date, product_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&order.customer_name)
        .bind(order.quantity)
        .bind(order.order_date)
        .bind(order.product_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_product_reference)?;

        let sql = format!("{} WHERE o.id = $1", SELECT_ORDERS);
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Order::from(row))
    }
}
