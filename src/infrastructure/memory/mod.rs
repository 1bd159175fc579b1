pub mod memory_connection;
pub mod plan_catalog;
pub mod repositories;
pub mod seed;
