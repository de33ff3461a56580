use super::ProductStore;
use crate::error::AppError;
use crate::model::{DeletePolicy, Product};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = "SELECT id, name, price FROM product ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = "SELECT id, name, price FROM product WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM product WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn create(&self, name: &str, price: f64) -> Result<Product, AppError> {
        let sql = "INSERT INTO product (name, price) VALUES ($1, $2) RETURNING id, name, price";
        tracing::debug!(sql = %sql, name, price, "query");
        let row = sqlx::query_as::<_, Product>(sql)
            .bind(name)
            .bind(price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64, policy: DeletePolicy) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        // Row lock conflicts with the key-share lock taken by order inserts,
        // so no new reference can appear until commit.
        let locked: Option<(i64,)> = sqlx::query_as("SELECT id FROM product WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Ok(false);
        }

        match policy {
            DeletePolicy::Orphan => {}
            DeletePolicy::Reject => {
                let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE product_id = $1")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
                if count > 0 {
                    return Err(AppError::Conflict(format!(
                        "product {} is referenced by {} order(s)",
                        id, count
                    )));
                }
            }
            DeletePolicy::Cascade => {
                let removed = sqlx::query("DELETE FROM orders WHERE product_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                tracing::debug!(product_id = id, orders = removed.rows_affected(), "cascade delete");
            }
        }

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
