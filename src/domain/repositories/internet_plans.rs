use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::internet_plans::InternetPlanEntity,
    value_objects::internet_plans::InsertInternetPlanModel,
};

#[async_trait]
#[automock]
pub trait InternetPlanRepository {
    async fn list(&self) -> Result<Vec<InternetPlanEntity>>;
    async fn create(
        &self,
        insert_internet_plan_model: InsertInternetPlanModel,
    ) -> Result<InternetPlanEntity>;
}
