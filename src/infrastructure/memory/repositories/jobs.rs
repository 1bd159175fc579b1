use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    entities::jobs::JobEntity, repositories::jobs::JobRepository,
    value_objects::jobs::InsertJobModel,
};
use crate::infrastructure::memory::memory_connection::{MemStoreSquad, lock_read, lock_write};

pub struct JobMemory {
    store: Arc<MemStoreSquad>,
}

impl JobMemory {
    pub fn new(store: Arc<MemStoreSquad>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl JobRepository for JobMemory {
    async fn list(&self) -> Result<Vec<JobEntity>> {
        let jobs = lock_read(&self.store.jobs)?;

        Ok(jobs.clone())
    }

    async fn list_by_type(&self, job_type: &str) -> Result<Vec<JobEntity>> {
        let jobs = lock_read(&self.store.jobs)?;

        Ok(jobs
            .iter()
            .filter(|job| job.job_type == job_type)
            .cloned()
            .collect())
    }

    async fn create(&self, insert_job_model: InsertJobModel) -> Result<JobEntity> {
        let mut jobs = lock_write(&self.store.jobs)?;

        let job = JobEntity {
            id: self.store.next_id(),
            title: insert_job_model.title,
            company: insert_job_model.company,
            location: insert_job_model.location,
            job_type: insert_job_model.job_type,
            salary: insert_job_model.salary,
            description: insert_job_model.description,
        };
        jobs.push(job.clone());

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::memory_connection::establish_connection;
    use crate::infrastructure::memory::plan_catalog::StaticPlanCatalog;

    #[tokio::test]
    async fn type_filter_returns_only_matching_jobs() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = JobMemory::new(store);

        let part_time = repository.list_by_type("Part-time").await.unwrap();
        assert_eq!(part_time.len(), 1);
        assert_eq!(part_time[0].title, "Restaurant Server");

        let remote = repository.list_by_type("Remote").await.unwrap();
        assert!(remote.is_empty());
    }

    #[tokio::test]
    async fn created_job_preserves_all_input_fields() {
        let store = establish_connection(Arc::new(StaticPlanCatalog))
            .await
            .unwrap();
        let repository = JobMemory::new(store);

        let job = repository
            .create(InsertJobModel {
                title: "Cashier".to_string(),
                company: "Tech Zone".to_string(),
                location: "Downtown".to_string(),
                job_type: "Contract".to_string(),
                salary: "$14/hour".to_string(),
                description: "Weekend shifts.".to_string(),
            })
            .await
            .unwrap();

        let jobs = repository.list().await.unwrap();
        assert_eq!(jobs.last(), Some(&job));
        assert_eq!(job.job_type, "Contract");
        assert_eq!(job.salary, "$14/hour");
    }
}
