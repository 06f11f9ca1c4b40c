//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod rent_schedule_repo;


pub use rent_schedule_repo::PostgresRentScheduleRepository;
