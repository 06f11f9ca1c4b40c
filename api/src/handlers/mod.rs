//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod projections;
pub mod schedules;

pub use projections::create_projection;
pub use schedules::{delete_schedule, get_next_payment, get_schedule, put_schedule};
