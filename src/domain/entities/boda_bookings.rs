use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodaBookingEntity {
    pub id: i32,
    pub pickup_location: String,
    pub destination: String,
    pub estimated_fare: String,
    pub estimated_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
