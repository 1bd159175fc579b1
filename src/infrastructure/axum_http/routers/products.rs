use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::{
    domain::repositories::products::ProductRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemStoreSquad, repositories::products::ProductMemory},
    },
    usecases::products::ProductUseCase,
};

pub fn routes(store: Arc<MemStoreSquad>) -> Router {
    let product_repository = ProductMemory::new(Arc::clone(&store));
    let product_usecase = ProductUseCase::new(Arc::new(product_repository));

    Router::new()
        .route("/", get(list_products))
        .with_state(Arc::new(product_usecase))
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

pub async fn list_products<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let products = product_usecase.list_products(query.category).await?;

    Ok(Json(products))
}
