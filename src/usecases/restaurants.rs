use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{
    entities::restaurants::RestaurantEntity, repositories::restaurants::RestaurantRepository,
};

/// Magic filter value meaning "no filtering"; the repository never sees it.
pub const ALL_CATEGORIES: &str = "All";

pub struct RestaurantUseCase<T>
where
    T: RestaurantRepository + Send + Sync + 'static,
{
    restaurant_repository: Arc<T>,
}

impl<T> RestaurantUseCase<T>
where
    T: RestaurantRepository + Send + Sync + 'static,
{
    pub fn new(restaurant_repository: Arc<T>) -> Self {
        Self {
            restaurant_repository,
        }
    }

    pub async fn list_restaurants(
        &self,
        category: Option<String>,
    ) -> Result<Vec<RestaurantEntity>> {
        match category.as_deref() {
            Some(category) if category != ALL_CATEGORIES => {
                debug!(category, "restaurants: filtered listing");
                self.restaurant_repository.list_by_category(category).await
            }
            _ => self.restaurant_repository.list().await,
        }
    }
}
