//! Product and order REST backend over PostgreSQL.

pub mod config;
pub mod convert;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use model::{DeletePolicy, Order, Product};
pub use routes::{app, server_router};
pub use service::{OrderService, ProductService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, OrderStore, ProductStore};
