//! Schedule configuration constants
//!
//! Defaults for projection and reminder behavior. Each can be overridden
//! through the environment (see `Config`).

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Days before a due date at which a rent reminder becomes due
pub const DEFAULT_REMINDER_LEAD_DAYS: i64 = 3;

/// Upper bound on upcoming due dates returned by one projection
pub const DEFAULT_MAX_UPCOMING_DATES: usize = 12;

/// Largest accepted `MAX_UPCOMING_DATES`: ten years of monthly dates
pub const MAX_UPCOMING_DATES_CEILING: usize = 120;

/// Upcoming due dates returned when the caller does not ask for a count
pub const DEFAULT_UPCOMING_COUNT: usize = 3;
