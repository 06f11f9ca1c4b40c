//! Rent schedule projection
//!
//! Computes due dates for a `RentSchedule` relative to a reference calendar
//! date. Everything here is a pure function of its arguments: no clock, no
//! I/O. Callers that want "today" resolve it through the `Clock` port first.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::domain::entities::{Frequency, RentSchedule};
use crate::error::ScheduleError;

const WEEK_DAYS: u64 = 7;
const FORTNIGHT_DAYS: u64 = 14;

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ScheduleError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ScheduleError::DateOutOfRange)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or(ScheduleError::DateOutOfRange)?;
    Ok(last.day())
}

/// `day_of_month` in the given month, clamped to the month's last day
pub fn clamped_day(year: i32, month: u32, day_of_month: u32) -> Result<NaiveDate, ScheduleError> {
    let day = day_of_month.min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::DateOutOfRange)
}

/// Compute the next due payment date for `schedule` as seen on `now`.
///
/// While the series has not started (`now <= anchor_date`) this is the anchor
/// date itself. Afterwards the result is always strictly after `now`: a due
/// date that falls on `now` counts as already reached.
pub fn next_payment_date(
    schedule: &RentSchedule,
    now: NaiveDate,
) -> Result<NaiveDate, ScheduleError> {
    // Validate up front so a bad monthly schedule fails even before it starts
    if schedule.frequency == Frequency::Monthly {
        schedule.monthly_day()?;
    }

    if now <= schedule.anchor_date {
        return Ok(schedule.anchor_date);
    }

    next_after(schedule, now)
}

/// The first `count` due dates starting from `next_payment_date(schedule, now)`
pub fn upcoming_payment_dates(
    schedule: &RentSchedule,
    now: NaiveDate,
    count: usize,
) -> Result<Vec<NaiveDate>, ScheduleError> {
    let mut dates = Vec::with_capacity(count);
    if count == 0 {
        return Ok(dates);
    }

    let mut current = next_payment_date(schedule, now)?;
    dates.push(current);
    while dates.len() < count {
        current = next_after(schedule, current)?;
        dates.push(current);
    }

    Ok(dates)
}

/// Whole days from `now` until `due` (negative if `due` has passed)
pub fn days_until_due(due: NaiveDate, now: NaiveDate) -> i64 {
    (due - now).num_days()
}

/// Earliest due date strictly after `after`, ignoring the not-started rule
fn next_after(schedule: &RentSchedule, after: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    match schedule.frequency {
        Frequency::Weekly => next_stepped(schedule.anchor_date, WEEK_DAYS, after),
        Frequency::Fortnightly => next_stepped(schedule.anchor_date, FORTNIGHT_DAYS, after),
        Frequency::Monthly => next_monthly(schedule.monthly_day()?, after),
    }
}

fn next_stepped(anchor: NaiveDate, step: u64, after: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let elapsed = (after - anchor).num_days();
    if elapsed < 0 {
        return Ok(anchor);
    }

    // elapsed / step whole cycles have been reached; the next one is strictly ahead
    let cycles = elapsed as u64 / step + 1;
    cycles
        .checked_mul(step)
        .and_then(|days| anchor.checked_add_days(Days::new(days)))
        .ok_or(ScheduleError::DateOutOfRange)
}

fn next_monthly(day_of_month: u32, after: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let candidate = clamped_day(after.year(), after.month(), day_of_month)?;
    if candidate > after {
        return Ok(candidate);
    }

    let (year, month) = if after.month() == 12 {
        (after.year() + 1, 1)
    } else {
        (after.year(), after.month() + 1)
    };
    clamped_day(year, month, day_of_month)
}
