//! Schema DDL for the `product` and `orders` tables. Idempotent.

use crate::error::AppError;
use sqlx::PgPool;

const PRODUCT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS product (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL
    )
"#;

// product_id is nullable: orphaned orders keep their row after the product is gone.
const ORDERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id BIGSERIAL PRIMARY KEY,
        customer_name TEXT NOT NULL,
        quantity BIGINT NOT NULL,
        order_date TIMESTAMPTZ NOT NULL,
        product_id BIGINT REFERENCES product (id) ON DELETE SET NULL
    )
"#;

const ORDERS_PRODUCT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS orders_product_id_idx ON orders (product_id)";

/// Create tables in dependency order: product before orders.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in [PRODUCT_DDL, ORDERS_DDL, ORDERS_PRODUCT_INDEX] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("schema ready");
    Ok(())
}
