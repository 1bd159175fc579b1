use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{entities::products::ProductEntity, repositories::products::ProductRepository};

pub const ALL_PRODUCTS: &str = "All Products";

pub struct ProductUseCase<T>
where
    T: ProductRepository + Send + Sync + 'static,
{
    product_repository: Arc<T>,
}

impl<T> ProductUseCase<T>
where
    T: ProductRepository + Send + Sync + 'static,
{
    pub fn new(product_repository: Arc<T>) -> Self {
        Self { product_repository }
    }

    pub async fn list_products(&self, category: Option<String>) -> Result<Vec<ProductEntity>> {
        match category.as_deref() {
            Some(category) if category != ALL_PRODUCTS => {
                debug!(category, "products: filtered listing");
                self.product_repository.list_by_category(category).await
            }
            _ => self.product_repository.list().await,
        }
    }
}
