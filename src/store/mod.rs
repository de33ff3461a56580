//! Persistence access per entity. Services depend on the traits; the
//! PostgreSQL implementations live in the submodules.

mod order;
mod product;

pub use order::PgOrderStore;
pub use product::PgProductStore;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::model::{DeletePolicy, NewOrder, Order, Product};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in storage order.
    async fn list_all(&self) -> Result<Vec<Product>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a product and return it with its generated id.
    async fn create(&self, name: &str, price: f64) -> Result<Product, AppError>;

    /// Remove the product, handling referencing orders per `policy`.
    /// Returns false when no product with `id` exists.
    async fn delete(&self, id: i64, policy: DeletePolicy) -> Result<bool, AppError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders in storage order, products resolved.
    async fn list_all(&self) -> Result<Vec<Order>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Insert the order and return it with its generated id and resolved product.
    /// Fails with [`AppError::InvalidReference`] when `product_id` does not exist.
    async fn create(&self, order: NewOrder) -> Result<Order, AppError>;
}

/// Open the pool bounded by the configured connection limits.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(config.connect_options.clone())
        .await?;
    tracing::info!(database = ?config.connect_options.get_database(), "connected to database");
    Ok(pool)
}

/// Ensure the configured database exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before [`connect`].
pub async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), AppError> {
    let db_name = match config.connect_options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = config
        .connect_options
        .clone()
        .database("postgres")
        .connect()
        .await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Map a foreign-key violation on `orders.product_id` to a missing-product error.
pub(crate) fn map_product_reference(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::InvalidReference("Product not found".into())
        }
        _ => AppError::Db(err),
    }
}
