use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::restaurants::RestaurantEntity, value_objects::restaurants::InsertRestaurantModel,
};

/// `list_by_category` is a case-sensitive exact match; sentinel "all" values
/// are a caller concern and never reach the repository.
#[async_trait]
#[automock]
pub trait RestaurantRepository {
    async fn list(&self) -> Result<Vec<RestaurantEntity>>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<RestaurantEntity>>;
    async fn create(&self, insert_restaurant_model: InsertRestaurantModel)
    -> Result<RestaurantEntity>;
}
