use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    entities::boda_bookings::BodaBookingEntity,
    repositories::boda_bookings::BodaBookingRepository,
    value_objects::boda_bookings::InsertBodaBookingModel,
};

pub struct BodaBookingUseCase<T>
where
    T: BodaBookingRepository + Send + Sync + 'static,
{
    boda_booking_repository: Arc<T>,
}

impl<T> BodaBookingUseCase<T>
where
    T: BodaBookingRepository + Send + Sync + 'static,
{
    pub fn new(boda_booking_repository: Arc<T>) -> Self {
        Self {
            boda_booking_repository,
        }
    }

    pub async fn list_bookings(&self) -> Result<Vec<BodaBookingEntity>> {
        self.boda_booking_repository.list().await
    }

    pub async fn book(
        &self,
        insert_boda_booking_model: InsertBodaBookingModel,
    ) -> Result<BodaBookingEntity> {
        let booking = self
            .boda_booking_repository
            .create(insert_boda_booking_model)
            .await?;

        info!(
            booking_id = booking.id,
            status = booking.status,
            "boda_bookings: booking created"
        );

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::boda_bookings::MockBodaBookingRepository;
    use crate::domain::value_objects::enums::booking_statuses::BookingStatus;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_model() -> InsertBodaBookingModel {
        InsertBodaBookingModel {
            pickup_location: "Main St".to_string(),
            destination: "5th Ave".to_string(),
            estimated_fare: "3.50".to_string(),
            estimated_time: "10 min".to_string(),
            status: BookingStatus::Pending,
        }
    }

    fn sample_entity(id: i32) -> BodaBookingEntity {
        BodaBookingEntity {
            id,
            pickup_location: "Main St".to_string(),
            destination: "5th Ave".to_string(),
            estimated_fare: "3.50".to_string(),
            estimated_time: "10 min".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn book_forwards_the_model_and_returns_the_stored_booking() {
        let mut boda_booking_repository = MockBodaBookingRepository::new();
        boda_booking_repository
            .expect_create()
            .with(eq(sample_model()))
            .returning(|_| Box::pin(async { Ok(sample_entity(7)) }));

        let usecase = BodaBookingUseCase::new(Arc::new(boda_booking_repository));

        let booking = usecase.book(sample_model()).await.unwrap();
        assert_eq!(booking.id, 7);
        assert_eq!(booking.status, "pending");
    }

    #[tokio::test]
    async fn list_bookings_passes_through() {
        let mut boda_booking_repository = MockBodaBookingRepository::new();
        boda_booking_repository
            .expect_list()
            .returning(|| Box::pin(async { Ok(vec![sample_entity(1)]) }));

        let usecase = BodaBookingUseCase::new(Arc::new(boda_booking_repository));

        let bookings = usecase.list_bookings().await.unwrap();
        assert_eq!(bookings.len(), 1);
    }
}
