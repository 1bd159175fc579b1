pub mod booking_statuses;
