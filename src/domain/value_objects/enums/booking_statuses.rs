use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle of a boda-boda booking. The server only ever assigns the
/// default; transitions are a client concern.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
        assert_eq!(BookingStatus::default().to_string(), "pending");
    }

    #[test]
    fn display_matches_serde_rendering() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Accepted,
            BookingStatus::InProgress,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
