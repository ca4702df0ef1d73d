//! Bounded Server-Sent Events stream

pub mod handlers;
pub mod models;

pub use handlers::{event_stream, routes};
