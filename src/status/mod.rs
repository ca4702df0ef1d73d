//! Health and readiness endpoints

pub mod handlers;
pub mod models;

pub use handlers::routes;
