use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    entities::products::ProductEntity, repositories::products::ProductRepository,
    value_objects::products::InsertProductModel,
};
use crate::infrastructure::memory::memory_connection::{MemStoreSquad, lock_read, lock_write};

pub struct ProductMemory {
    store: Arc<MemStoreSquad>,
}

impl ProductMemory {
    pub fn new(store: Arc<MemStoreSquad>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for ProductMemory {
    async fn list(&self) -> Result<Vec<ProductEntity>> {
        let products = lock_read(&self.store.products)?;

        Ok(products.clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<ProductEntity>> {
        let products = lock_read(&self.store.products)?;

        Ok(products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    async fn create(&self, insert_product_model: InsertProductModel) -> Result<ProductEntity> {
        let mut products = lock_write(&self.store.products)?;

        let product = ProductEntity {
            id: self.store.next_id(),
            name: insert_product_model.name,
            price: insert_product_model.price,
            store: insert_product_model.store,
            category: insert_product_model.category,
            image_url: insert_product_model.image_url,
        };
        products.push(product.clone());

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::memory_connection::establish_connection;
    use crate::infrastructure::memory::plan_catalog::StaticPlanCatalog;

    #[tokio::test]
    async fn seeded_products_keep_insertion_order_and_fields() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = ProductMemory::new(store);

        let products = repository.list().await.unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Fresh Vegetables Bundle");
        assert_eq!(products[1].store, "Tech Zone");
        assert_eq!(products[2].category, "Home");
    }

    #[tokio::test]
    async fn category_filter_returns_only_matches() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = ProductMemory::new(store);

        let electronics = repository.list_by_category("Electronics").await.unwrap();
        assert_eq!(electronics.len(), 1);
        assert_eq!(electronics[0].name, "Smartphone");

        let clothing = repository.list_by_category("Clothing").await.unwrap();
        assert!(clothing.is_empty());
    }
}
