//! Shared application state for all routes.

use crate::model::DeletePolicy;
use crate::service::{OrderService, ProductService};
use crate::store::{OrderStore, PgOrderStore, PgProductStore, ProductStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub orders: OrderService,
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(
        product_store: Arc<dyn ProductStore>,
        order_store: Arc<dyn OrderStore>,
        delete_policy: DeletePolicy,
    ) -> Self {
        AppState {
            products: ProductService::new(product_store.clone(), delete_policy),
            orders: OrderService::new(order_store, product_store),
        }
    }

    /// Wire services over the PostgreSQL stores.
    pub fn from_pool(pool: PgPool, delete_policy: DeletePolicy) -> Self {
        Self::new(
            Arc::new(PgProductStore::new(pool.clone())),
            Arc::new(PgOrderStore::new(pool)),
            delete_policy,
        )
    }
}
