//! Clock port
//!
//! The only way application code learns what "today" is. Projection itself
//! never reads the system clock.

use chrono::NaiveDate;

/// Source of the current calendar date
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Today's date in the calendar rent schedules are kept in
    fn today(&self) -> NaiveDate;
}
