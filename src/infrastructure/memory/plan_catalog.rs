use anyhow::Result;
use async_trait::async_trait;

use crate::domain::repositories::plan_catalog::PlanCatalog;
use crate::domain::value_objects::internet_plans::InsertInternetPlanModel;
use crate::infrastructure::memory::seed;

/// Built-in plan catalog backed by the fixed plan list.
pub struct StaticPlanCatalog;

#[async_trait]
impl PlanCatalog for StaticPlanCatalog {
    async fn fetch_plans(&self) -> Result<Vec<InsertInternetPlanModel>> {
        Ok(seed::internet_plans())
    }
}
