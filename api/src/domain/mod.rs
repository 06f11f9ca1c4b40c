//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `projector`: Due-date projection for rent schedules

pub mod entities;
pub mod ports;
pub mod projector;
