use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::{
    domain::repositories::internet_plans::InternetPlanRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemStoreSquad, repositories::internet_plans::InternetPlanMemory},
    },
    usecases::internet_plans::InternetPlanUseCase,
};

pub fn routes(store: Arc<MemStoreSquad>) -> Router {
    let internet_plan_repository = InternetPlanMemory::new(Arc::clone(&store));
    let internet_plan_usecase = InternetPlanUseCase::new(Arc::new(internet_plan_repository));

    Router::new()
        .route("/", get(list_plans))
        .with_state(Arc::new(internet_plan_usecase))
}

pub async fn list_plans<T>(
    State(internet_plan_usecase): State<Arc<InternetPlanUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: InternetPlanRepository + Send + Sync + 'static,
{
    let plans = internet_plan_usecase.list_plans().await?;

    Ok(Json(plans))
}
