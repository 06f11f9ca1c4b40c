//! SeaORM entities
//!
//! Table mappings for the PostgreSQL adapters. Domain code never sees these;
//! adapters convert them into domain entities.

pub mod rent_schedules;
