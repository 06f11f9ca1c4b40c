//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{
    Frequency, RentSchedule, RentScheduleId, RentScheduleInput, RentScheduleRecord, TenantId,
    DEFAULT_CURRENCY,
};
use crate::domain::ports::clock::MockClock;
use crate::error::ScheduleError;

/// Shorthand for a calendar date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A monthly schedule in the default currency
pub fn monthly_schedule(
    amount_minor: i64,
    anchor_date: NaiveDate,
    day_of_month: u32,
) -> Result<RentSchedule, ScheduleError> {
    RentSchedule::new(
        amount_minor,
        DEFAULT_CURRENCY,
        Frequency::Monthly,
        anchor_date,
        Some(i64::from(day_of_month)),
    )
}

/// A weekly or fortnightly schedule in the default currency
pub fn stepped_schedule(
    frequency: Frequency,
    amount_minor: i64,
    anchor_date: NaiveDate,
) -> Result<RentSchedule, ScheduleError> {
    RentSchedule::new(amount_minor, DEFAULT_CURRENCY, frequency, anchor_date, None)
}

/// A clock that always reports `today`
pub fn fixed_clock(today: NaiveDate) -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_today().return_const(today);
    clock
}

/// Form payload for a monthly schedule
pub fn monthly_input(anchor_date: &str, day_of_month: i64) -> RentScheduleInput {
    RentScheduleInput {
        amount_minor: 95_000,
        currency: Some("GBP".to_string()),
        frequency: "monthly".to_string(),
        anchor_date: Some(anchor_date.to_string()),
        day_of_month: Some(day_of_month),
    }
}

/// Form payload for a weekly schedule
pub fn weekly_input(anchor_date: &str) -> RentScheduleInput {
    RentScheduleInput {
        amount_minor: 25_000,
        currency: None,
        frequency: "weekly".to_string(),
        anchor_date: Some(anchor_date.to_string()),
        day_of_month: None,
    }
}

/// A stored monthly schedule: £950 on the 31st, starting 2024-01-31
pub fn test_record() -> RentScheduleRecord {
    test_record_for(TenantId::new())
}

/// A stored monthly schedule for a specific tenant
pub fn test_record_for(tenant_id: TenantId) -> RentScheduleRecord {
    RentScheduleRecord {
        id: RentScheduleId::new(),
        tenant_id,
        schedule: monthly_schedule(95_000, date(2024, 1, 31), 31).unwrap(),
        next_payment_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
