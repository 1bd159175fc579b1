pub mod boda_bookings;
pub mod internet_plans;
pub mod jobs;
pub mod plan_catalog;
pub mod products;
pub mod restaurants;
pub mod users;
