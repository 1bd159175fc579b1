use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::{
    domain::repositories::restaurants::RestaurantRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemStoreSquad, repositories::restaurants::RestaurantMemory},
    },
    usecases::restaurants::RestaurantUseCase,
};

pub fn routes(store: Arc<MemStoreSquad>) -> Router {
    let restaurant_repository = RestaurantMemory::new(Arc::clone(&store));
    let restaurant_usecase = RestaurantUseCase::new(Arc::new(restaurant_repository));

    Router::new()
        .route("/", get(list_restaurants))
        .with_state(Arc::new(restaurant_usecase))
}

#[derive(Debug, Deserialize)]
pub struct ListRestaurantsQuery {
    pub category: Option<String>,
}

pub async fn list_restaurants<T>(
    State(restaurant_usecase): State<Arc<RestaurantUseCase<T>>>,
    Query(query): Query<ListRestaurantsQuery>,
) -> Result<impl IntoResponse, AppError>
where
    T: RestaurantRepository + Send + Sync + 'static,
{
    let restaurants = restaurant_usecase.list_restaurants(query.category).await?;

    Ok(Json(restaurants))
}
