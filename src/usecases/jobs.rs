use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{entities::jobs::JobEntity, repositories::jobs::JobRepository};

pub const ALL_JOBS: &str = "All Jobs";

pub struct JobUseCase<T>
where
    T: JobRepository + Send + Sync + 'static,
{
    job_repository: Arc<T>,
}

impl<T> JobUseCase<T>
where
    T: JobRepository + Send + Sync + 'static,
{
    pub fn new(job_repository: Arc<T>) -> Self {
        Self { job_repository }
    }

    pub async fn list_jobs(&self, job_type: Option<String>) -> Result<Vec<JobEntity>> {
        match job_type.as_deref() {
            Some(job_type) if job_type != ALL_JOBS => {
                debug!(job_type, "jobs: filtered listing");
                self.job_repository.list_by_type(job_type).await
            }
            _ => self.job_repository.list().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::jobs::MockJobRepository;
    use mockall::predicate::eq;

    fn sample_job(id: i32, job_type: &str) -> JobEntity {
        JobEntity {
            id,
            title: "Restaurant Server".to_string(),
            company: "Mama's Kitchen".to_string(),
            location: "City Center".to_string(),
            job_type: job_type.to_string(),
            salary: "$15/hour + tips".to_string(),
            description: "Flexible hours.".to_string(),
        }
    }

    #[tokio::test]
    async fn type_filter_is_forwarded() {
        let mut job_repository = MockJobRepository::new();
        job_repository
            .expect_list_by_type()
            .with(eq("Part-time"))
            .returning(|_| Box::pin(async { Ok(vec![sample_job(4, "Part-time")]) }));

        let usecase = JobUseCase::new(Arc::new(job_repository));

        let jobs = usecase
            .list_jobs(Some("Part-time".to_string()))
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_type, "Part-time");
    }

    #[tokio::test]
    async fn sentinel_all_jobs_skips_filtering() {
        let mut job_repository = MockJobRepository::new();
        job_repository.expect_list().returning(|| {
            Box::pin(async { Ok(vec![sample_job(1, "Full-time"), sample_job(2, "Flexible")]) })
        });

        let usecase = JobUseCase::new(Arc::new(job_repository));

        let jobs = usecase.list_jobs(Some(ALL_JOBS.to_string())).await.unwrap();
        assert_eq!(jobs.len(), 2);
    }
}
