use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::internet_plans::InsertInternetPlanModel;

/// Source of the internet-plan seed. The store awaits this to completion
/// during startup, so no request can observe a store without plans.
#[async_trait]
#[automock]
pub trait PlanCatalog {
    async fn fetch_plans(&self) -> Result<Vec<InsertInternetPlanModel>>;
}
