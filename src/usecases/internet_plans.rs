use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{
    entities::internet_plans::InternetPlanEntity,
    repositories::internet_plans::InternetPlanRepository,
};

pub struct InternetPlanUseCase<T>
where
    T: InternetPlanRepository + Send + Sync + 'static,
{
    internet_plan_repository: Arc<T>,
}

impl<T> InternetPlanUseCase<T>
where
    T: InternetPlanRepository + Send + Sync + 'static,
{
    pub fn new(internet_plan_repository: Arc<T>) -> Self {
        Self {
            internet_plan_repository,
        }
    }

    pub async fn list_plans(&self) -> Result<Vec<InternetPlanEntity>> {
        let plans = self.internet_plan_repository.list().await?;
        debug!(count = plans.len(), "internet_plans: listed plans");

        Ok(plans)
    }
}
