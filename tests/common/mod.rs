// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use product_order::model::{DeletePolicy, NewOrder, Order, Product};
use product_order::{AppError, AppState, OrderStore, ProductStore};
use std::sync::{Arc, Mutex};

/// Stored order row; `product_id` is cleared when its product is orphan-deleted.
#[derive(Clone, Debug)]
struct OrderRecord {
    id: i64,
    customer_name: String,
    quantity: i64,
    order_date: chrono::DateTime<chrono::Utc>,
    product_id: Option<i64>,
}

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    orders: Vec<OrderRecord>,
    next_product_id: i64,
    next_order_id: i64,
}

/// In-memory database shared by [`MemProductStore`] and [`MemOrderStore`].
/// Mirrors the PostgreSQL schema: serial ids starting at 1 and a
/// set-null foreign key from orders to products.
#[derive(Clone, Default)]
pub struct MemDb {
    tables: Arc<Mutex<Tables>>,
}

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_count(&self) -> usize {
        self.tables.lock().unwrap().orders.len()
    }

    pub fn stores(&self) -> (Arc<dyn ProductStore>, Arc<dyn OrderStore>) {
        (
            Arc::new(MemProductStore { db: self.clone() }),
            Arc::new(MemOrderStore { db: self.clone() }),
        )
    }

    pub fn state(&self, policy: DeletePolicy) -> AppState {
        let (products, orders) = self.stores();
        AppState::new(products, orders, policy)
    }
}

fn resolve(tables: &Tables, record: &OrderRecord) -> Order {
    let product = record
        .product_id
        .and_then(|pid| tables.products.iter().find(|p| p.id == pid).cloned());
    Order {
        id: record.id,
        customer_name: record.customer_name.clone(),
        quantity: record.quantity,
        order_date: record.order_date,
        product,
    }
}

pub struct MemProductStore {
    db: MemDb,
}

#[async_trait]
impl ProductStore for MemProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.db.tables.lock().unwrap().products.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let t = self.db.tables.lock().unwrap();
        Ok(t.products.iter().find(|p| p.id == id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let t = self.db.tables.lock().unwrap();
        Ok(t.products.iter().any(|p| p.id == id))
    }

    async fn create(&self, name: &str, price: f64) -> Result<Product, AppError> {
        let mut t = self.db.tables.lock().unwrap();
        t.next_product_id += 1;
        let product = Product {
            id: t.next_product_id,
            name: name.to_string(),
            price,
        };
        t.products.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64, policy: DeletePolicy) -> Result<bool, AppError> {
        let mut t = self.db.tables.lock().unwrap();
        if !t.products.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        let referencing = t.orders.iter().filter(|o| o.product_id == Some(id)).count();
        match policy {
            DeletePolicy::Reject if referencing > 0 => {
                return Err(AppError::Conflict(format!(
                    "product {} is referenced by {} order(s)",
                    id, referencing
                )));
            }
            DeletePolicy::Cascade => t.orders.retain(|o| o.product_id != Some(id)),
            _ => {
                for o in t.orders.iter_mut().filter(|o| o.product_id == Some(id)) {
                    o.product_id = None;
                }
            }
        }
        t.products.retain(|p| p.id != id);
        Ok(true)
    }
}

pub struct MemOrderStore {
    db: MemDb,
}

#[async_trait]
impl OrderStore for MemOrderStore {
    async fn list_all(&self) -> Result<Vec<Order>, AppError> {
        let t = self.db.tables.lock().unwrap();
        Ok(t.orders.iter().map(|o| resolve(&t, o)).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let t = self.db.tables.lock().unwrap();
        Ok(t.orders.iter().find(|o| o.id == id).map(|o| resolve(&t, o)))
    }

    async fn create(&self, order: NewOrder) -> Result<Order, AppError> {
        let mut t = self.db.tables.lock().unwrap();
        if !t.products.iter().any(|p| p.id == order.product_id) {
            return Err(AppError::InvalidReference("Product not found".into()));
        }
        t.next_order_id += 1;
        let record = OrderRecord {
            id: t.next_order_id,
            customer_name: order.customer_name,
            quantity: order.quantity,
            order_date: order.order_date,
            product_id: Some(order.product_id),
        };
        t.orders.push(record.clone());
        Ok(resolve(&t, &record))
    }
}

pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
