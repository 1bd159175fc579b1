use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{
    entities::boda_bookings::BodaBookingEntity,
    repositories::boda_bookings::BodaBookingRepository,
    value_objects::boda_bookings::InsertBodaBookingModel,
};
use crate::infrastructure::memory::memory_connection::{MemStoreSquad, lock_read, lock_write};

pub struct BodaBookingMemory {
    store: Arc<MemStoreSquad>,
}

impl BodaBookingMemory {
    pub fn new(store: Arc<MemStoreSquad>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BodaBookingRepository for BodaBookingMemory {
    async fn list(&self) -> Result<Vec<BodaBookingEntity>> {
        let bookings = lock_read(&self.store.boda_bookings)?;

        Ok(bookings.clone())
    }

    async fn create(
        &self,
        insert_boda_booking_model: InsertBodaBookingModel,
    ) -> Result<BodaBookingEntity> {
        let mut bookings = lock_write(&self.store.boda_bookings)?;

        let booking = BodaBookingEntity {
            id: self.store.next_id(),
            pickup_location: insert_boda_booking_model.pickup_location,
            destination: insert_boda_booking_model.destination,
            estimated_fare: insert_boda_booking_model.estimated_fare,
            estimated_time: insert_boda_booking_model.estimated_time,
            status: insert_boda_booking_model.status.to_string(),
            created_at: Utc::now(),
        };
        bookings.push(booking.clone());

        Ok(booking)
    }
}
