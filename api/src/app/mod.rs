//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod schedule_config;
pub mod schedule_service;

pub use schedule_service::{Projection, ProjectionSettings, ScheduleService};
