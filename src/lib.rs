pub mod aggregators;
pub mod expenses;
pub mod exporter;
pub mod schema;
pub mod sessions;
pub mod users;
pub mod utils;
pub mod web;
