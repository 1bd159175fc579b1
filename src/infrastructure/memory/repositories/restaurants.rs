use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    entities::restaurants::RestaurantEntity, repositories::restaurants::RestaurantRepository,
    value_objects::restaurants::InsertRestaurantModel,
};
use crate::infrastructure::memory::memory_connection::{MemStoreSquad, lock_read, lock_write};

pub struct RestaurantMemory {
    store: Arc<MemStoreSquad>,
}

impl RestaurantMemory {
    pub fn new(store: Arc<MemStoreSquad>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RestaurantRepository for RestaurantMemory {
    async fn list(&self) -> Result<Vec<RestaurantEntity>> {
        let restaurants = lock_read(&self.store.restaurants)?;

        Ok(restaurants.clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<RestaurantEntity>> {
        let restaurants = lock_read(&self.store.restaurants)?;

        Ok(restaurants
            .iter()
            .filter(|restaurant| restaurant.category == category)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        insert_restaurant_model: InsertRestaurantModel,
    ) -> Result<RestaurantEntity> {
        let mut restaurants = lock_write(&self.store.restaurants)?;

        let restaurant = RestaurantEntity {
            id: self.store.next_id(),
            name: insert_restaurant_model.name,
            description: insert_restaurant_model.description,
            rating: insert_restaurant_model.rating,
            category: insert_restaurant_model.category,
            image_url: insert_restaurant_model.image_url,
        };
        restaurants.push(restaurant.clone());

        Ok(restaurant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::memory_connection::establish_connection;
    use crate::infrastructure::memory::plan_catalog::StaticPlanCatalog;

    #[tokio::test]
    async fn seed_contains_exactly_the_two_restaurants() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = RestaurantMemory::new(store);

        let restaurants = repository.list().await.unwrap();

        let names: Vec<&str> = restaurants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Mama's Kitchen", "Tony's Pizza"]);
        assert_eq!(restaurants[0].category, "Local Cuisine");
    }

    #[tokio::test]
    async fn category_filter_is_an_exact_match() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = RestaurantMemory::new(store);

        let pizza = repository.list_by_category("Pizza").await.unwrap();
        assert_eq!(pizza.len(), 1);
        assert_eq!(pizza[0].name, "Tony's Pizza");

        // Case-sensitive: no partial or case-folded matching.
        let lowercase = repository.list_by_category("pizza").await.unwrap();
        assert!(lowercase.is_empty());
    }

    #[tokio::test]
    async fn filter_returns_exactly_the_matching_subset_of_list() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = RestaurantMemory::new(store);

        let all = repository.list().await.unwrap();
        let filtered = repository.list_by_category("Local Cuisine").await.unwrap();

        let expected: Vec<_> = all
            .into_iter()
            .filter(|r| r.category == "Local Cuisine")
            .collect();
        assert_eq!(filtered, expected);
    }
}
