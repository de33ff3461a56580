use crate::error::AppError;
use crate::model::{DeletePolicy, Product};
use crate::store::ProductStore;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    delete_policy: DeletePolicy,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, delete_policy: DeletePolicy) -> Self {
        Self { store, delete_policy }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        self.store.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Product, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, price: f64) -> Result<Product, AppError> {
        let product = self.store.create(name, price).await?;
        tracing::info!(product_id = product.id, "product created");
        Ok(product)
    }

    /// Delete an existing product. Referencing orders are handled per the
    /// configured [`DeletePolicy`].
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.exists(id).await? {
            return Err(AppError::NotFound("Product not found".into()));
        }
        // A concurrent delete may win between the check and the delete.
        if !self.store.delete(id, self.delete_policy).await? {
            return Err(AppError::NotFound("Product not found".into()));
        }
        tracing::info!(product_id = id, policy = ?self.delete_policy, "product deleted");
        Ok(())
    }
}
