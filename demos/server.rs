//! Example server: loads config from env, ensures the database and tables exist,
//! mounts resource, readiness and docs routes.

use product_order::{
    connect, ensure_database_exists, ensure_schema, server_router, telemetry, AppConfig, AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    telemetry::init("product_order=info,server=info");
    tracing::info!(?config, "configuration loaded");

    ensure_database_exists(&config.database).await?;
    let pool = connect(&config.database).await?;
    ensure_schema(&pool).await?;

    let state = AppState::from_pool(pool.clone(), config.delete_policy);
    let router = server_router(state, pool, config.max_body_bytes);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
