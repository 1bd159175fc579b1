use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::booking_statuses::BookingStatus;

/// Request body for booking a ride. `status` is optional and defaults to
/// pending; `id` and `createdAt` are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertBodaBookingModel {
    pub pickup_location: String,
    pub destination: String,
    pub estimated_fare: String,
    pub estimated_time: String,
    #[serde(default)]
    pub status: BookingStatus,
}
