//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod rent_schedule;
pub mod tenant;

pub use rent_schedule::{
    parse_date, Frequency, NewRentSchedule, RentSchedule, RentScheduleId, RentScheduleInput,
    RentScheduleRecord, DATE_FORMAT, DEFAULT_CURRENCY,
};
pub use tenant::TenantId;
