//! System clock adapter

use chrono::{FixedOffset, NaiveDate, Utc};

use crate::domain::ports::Clock;
use crate::error::ConfigError;

/// Reads the system clock and reports the date in a fixed UTC offset
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset_minutes: i32) -> Result<Self, ConfigError> {
        let offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::Invalid {
                name: "CALENDAR_UTC_OFFSET_MINUTES",
                value: offset_minutes.to_string(),
            })?;
        Ok(Self { offset })
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}
