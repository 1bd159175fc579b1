use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;

use crate::{
    domain::{
        repositories::boda_bookings::BodaBookingRepository,
        value_objects::boda_bookings::InsertBodaBookingModel,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemStoreSquad, repositories::boda_bookings::BodaBookingMemory},
    },
    usecases::boda_bookings::BodaBookingUseCase,
};

pub fn routes(store: Arc<MemStoreSquad>) -> Router {
    let boda_booking_repository = BodaBookingMemory::new(Arc::clone(&store));
    let boda_booking_usecase = BodaBookingUseCase::new(Arc::new(boda_booking_repository));

    Router::new()
        .route("/", get(list_bookings))
        .route("/", post(book))
        .with_state(Arc::new(boda_booking_usecase))
}

pub async fn list_bookings<T>(
    State(boda_booking_usecase): State<Arc<BodaBookingUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: BodaBookingRepository + Send + Sync + 'static,
{
    let bookings = boda_booking_usecase.list_bookings().await?;

    Ok(Json(bookings))
}

pub async fn book<T>(
    State(boda_booking_usecase): State<Arc<BodaBookingUseCase<T>>>,
    WithRejection(Json(insert_boda_booking_model), _): WithRejection<
        Json<InsertBodaBookingModel>,
        AppError,
    >,
) -> Result<impl IntoResponse, AppError>
where
    T: BodaBookingRepository + Send + Sync + 'static,
{
    let booking = boda_booking_usecase.book(insert_boda_booking_model).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}
