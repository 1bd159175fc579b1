use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    entities::internet_plans::InternetPlanEntity,
    repositories::internet_plans::InternetPlanRepository,
    value_objects::internet_plans::InsertInternetPlanModel,
};
use crate::infrastructure::memory::memory_connection::{MemStoreSquad, lock_read, lock_write};

pub struct InternetPlanMemory {
    store: Arc<MemStoreSquad>,
}

impl InternetPlanMemory {
    pub fn new(store: Arc<MemStoreSquad>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InternetPlanRepository for InternetPlanMemory {
    async fn list(&self) -> Result<Vec<InternetPlanEntity>> {
        let plans = lock_read(&self.store.internet_plans)?;

        Ok(plans.clone())
    }

    async fn create(
        &self,
        insert_internet_plan_model: InsertInternetPlanModel,
    ) -> Result<InternetPlanEntity> {
        let mut plans = lock_write(&self.store.internet_plans)?;

        let plan = InternetPlanEntity {
            id: self.store.next_id(),
            name: insert_internet_plan_model.name,
            price: insert_internet_plan_model.price,
            download_speed: insert_internet_plan_model.download_speed,
            upload_speed: insert_internet_plan_model.upload_speed,
            data_limit: insert_internet_plan_model.data_limit,
            features: insert_internet_plan_model.features,
            is_popular: insert_internet_plan_model.is_popular,
        };
        plans.push(plan.clone());

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::memory_connection::establish_connection;
    use crate::infrastructure::memory::plan_catalog::StaticPlanCatalog;

    #[tokio::test]
    async fn seeded_plans_are_listed_in_insertion_order() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = InternetPlanMemory::new(store);

        let plans = repository.list().await.unwrap();

        let names: Vec<&str> = plans.iter().map(|plan| plan.name.as_str()).collect();
        assert_eq!(names, ["Basic Plan", "Premium Plan", "Enterprise Plan"]);
        assert!(plans[1].is_popular);
    }

    #[tokio::test]
    async fn repeated_list_calls_return_identical_sequences() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = InternetPlanMemory::new(store);

        let first = repository.list().await.unwrap();
        let second = repository.list().await.unwrap();

        assert_eq!(first, second);
    }
}
