use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::products::ProductEntity, value_objects::products::InsertProductModel,
};

#[async_trait]
#[automock]
pub trait ProductRepository {
    async fn list(&self) -> Result<Vec<ProductEntity>>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<ProductEntity>>;
    async fn create(&self, insert_product_model: InsertProductModel) -> Result<ProductEntity>;
}
