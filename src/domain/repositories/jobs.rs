use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{entities::jobs::JobEntity, value_objects::jobs::InsertJobModel};

#[async_trait]
#[automock]
pub trait JobRepository {
    async fn list(&self) -> Result<Vec<JobEntity>>;
    async fn list_by_type(&self, job_type: &str) -> Result<Vec<JobEntity>>;
    async fn create(&self, insert_job_model: InsertJobModel) -> Result<JobEntity>;
}
