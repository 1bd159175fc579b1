use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::boda_bookings::BodaBookingEntity,
    value_objects::boda_bookings::InsertBodaBookingModel,
};

#[async_trait]
#[automock]
pub trait BodaBookingRepository {
    async fn list(&self) -> Result<Vec<BodaBookingEntity>>;
    /// Assigns the identifier and the creation timestamp.
    async fn create(
        &self,
        insert_boda_booking_model: InsertBodaBookingModel,
    ) -> Result<BodaBookingEntity>;
}
