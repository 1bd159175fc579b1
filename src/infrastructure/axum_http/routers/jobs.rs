use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::{
    domain::repositories::jobs::JobRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemStoreSquad, repositories::jobs::JobMemory},
    },
    usecases::jobs::JobUseCase,
};

pub fn routes(store: Arc<MemStoreSquad>) -> Router {
    let job_repository = JobMemory::new(Arc::clone(&store));
    let job_usecase = JobUseCase::new(Arc::new(job_repository));

    Router::new()
        .route("/", get(list_jobs))
        .with_state(Arc::new(job_usecase))
}

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

pub async fn list_jobs<T>(
    State(job_usecase): State<Arc<JobUseCase<T>>>,
    Query(query): Query<ListJobsQuery>,
) -> Result<impl IntoResponse, AppError>
where
    T: JobRepository + Send + Sync + 'static,
{
    let jobs = job_usecase.list_jobs(query.job_type).await?;

    Ok(Json(jobs))
}
