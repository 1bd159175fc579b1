use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use axum_extra::extract::WithRejection;

use crate::{
    domain::{
        repositories::users::UserRepository,
        value_objects::users::{InsertUserModel, LoginModel},
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemStoreSquad, repositories::users::UserMemory},
    },
    usecases::users::UserUseCase,
};

pub fn routes(store: Arc<MemStoreSquad>) -> Router {
    let user_repository = UserMemory::new(Arc::clone(&store));
    let user_usecase = UserUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .with_state(Arc::new(user_usecase))
}

pub async fn register<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    WithRejection(Json(insert_user_model), _): WithRejection<Json<InsertUserModel>, AppError>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync + 'static,
{
    let user = user_usecase.register(insert_user_model).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    WithRejection(Json(login_model), _): WithRejection<Json<LoginModel>, AppError>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync + 'static,
{
    let result = user_usecase.login(login_model).await?;

    Ok(Json(result))
}
