//! Rent schedule domain entity
//!
//! A rent schedule is the recurring-rent configuration a tenant sets up:
//! how much, how often, and when the series starts. Schedules arrive from the
//! editor form as a loosely typed `RentScheduleInput` and are validated into a
//! `RentSchedule` before anything projects them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tenant::TenantId;
use crate::error::ScheduleError;

/// Wire/storage format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency assumed when a schedule payload omits one
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Unique identifier for a stored rent schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentScheduleId(pub Uuid);

impl RentScheduleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RentScheduleId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RentScheduleId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RentScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Weekly,
    Fortnightly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Fortnightly => write!(f, "fortnightly"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            "fortnightly" => Ok(Frequency::Fortnightly),
            _ => Err(ScheduleError::InvalidFrequency(s.to_string())),
        }
    }
}

/// A validated recurring rent schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentSchedule {
    /// Rent amount in minor currency units (pence, cents)
    pub amount_minor: i64,
    pub currency: String,
    pub frequency: Frequency,
    /// First payment date; phase reference for weekly and fortnightly cadences
    pub anchor_date: NaiveDate,
    /// Day of month rent falls on. Only meaningful for monthly schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
}

impl RentSchedule {
    pub fn new(
        amount_minor: i64,
        currency: &str,
        frequency: Frequency,
        anchor_date: NaiveDate,
        day_of_month: Option<i64>,
    ) -> Result<Self, ScheduleError> {
        if amount_minor <= 0 {
            return Err(ScheduleError::InvalidAmount(amount_minor));
        }

        let currency = currency.trim().to_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ScheduleError::InvalidCurrency(currency));
        }

        let day_of_month = match frequency {
            Frequency::Monthly => Some(validate_day_of_month(day_of_month)?),
            Frequency::Weekly | Frequency::Fortnightly => None,
        };

        Ok(Self {
            amount_minor,
            currency,
            frequency,
            anchor_date,
            day_of_month,
        })
    }

    /// The day of month a monthly schedule targets, re-checked against 1-31
    pub fn monthly_day(&self) -> Result<u32, ScheduleError> {
        validate_day_of_month(self.day_of_month.map(i64::from))
    }
}

fn validate_day_of_month(day: Option<i64>) -> Result<u32, ScheduleError> {
    match day {
        Some(d @ 1..=31) => Ok(d as u32),
        Some(d) => Err(ScheduleError::InvalidDayOfMonth(d)),
        // Missing is reported as 0, which is outside the valid range
        None => Err(ScheduleError::InvalidDayOfMonth(0)),
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(raw: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ScheduleError::InvalidAnchorDate(raw.to_string()))
}

/// Schedule payload as submitted by the schedule editor form
///
/// Everything is loosely typed here on purpose: the conversion to
/// `RentSchedule` is the single validation point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentScheduleInput {
    pub amount_minor: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub frequency: String,
    #[serde(default)]
    pub anchor_date: Option<String>,
    #[serde(default)]
    pub day_of_month: Option<i64>,
}

impl TryFrom<RentScheduleInput> for RentSchedule {
    type Error = ScheduleError;

    fn try_from(input: RentScheduleInput) -> Result<Self, Self::Error> {
        let frequency: Frequency = input.frequency.parse()?;
        let anchor_date = match input.anchor_date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => return Err(ScheduleError::InvalidAnchorDate("missing".to_string())),
        };

        RentSchedule::new(
            input.amount_minor,
            input.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
            frequency,
            anchor_date,
            input.day_of_month,
        )
    }
}

/// A rent schedule as persisted for a tenant
#[derive(Debug, Clone, Serialize)]
pub struct RentScheduleRecord {
    pub id: RentScheduleId,
    pub tenant_id: TenantId,
    #[serde(flatten)]
    pub schedule: RentSchedule,
    /// Last projected due date written back by the schedule service
    pub next_payment_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create or replace a tenant's schedule
#[derive(Debug, Clone)]
pub struct NewRentSchedule {
    pub tenant_id: TenantId,
    pub schedule: RentSchedule,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::monthly_schedule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(frequency: &str, anchor: Option<&str>, day: Option<i64>) -> RentScheduleInput {
        RentScheduleInput {
            amount_minor: 95_000,
            currency: None,
            frequency: frequency.to_string(),
            anchor_date: anchor.map(str::to_string),
            day_of_month: day,
        }
    }

    #[test]
    fn frequency_from_str() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!(
            "fortnightly".parse::<Frequency>().unwrap(),
            Frequency::Fortnightly
        );
    }

    #[test]
    fn frequency_is_matched_exactly() {
        for raw in ["MONTHLY", "Weekly", " fortnightly ", "weekly\n"] {
            assert_eq!(
                raw.parse::<Frequency>().unwrap_err(),
                ScheduleError::InvalidFrequency(raw.to_string())
            );
        }
    }

    #[test]
    fn input_with_capitalised_frequency_is_rejected() {
        let err = RentSchedule::try_from(input("Monthly", Some("2024-01-01"), Some(1))).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidFrequency("Monthly".to_string()));
    }

    #[test]
    fn unknown_frequency_is_rejected_not_defaulted() {
        let err = "yearly".parse::<Frequency>().unwrap_err();
        assert_eq!(err, ScheduleError::InvalidFrequency("yearly".to_string()));
        assert!("".parse::<Frequency>().is_err());
    }

    #[test]
    fn frequency_display_round_trips() {
        for f in [Frequency::Monthly, Frequency::Weekly, Frequency::Fortnightly] {
            assert_eq!(f.to_string().parse::<Frequency>().unwrap(), f);
        }
    }

    #[test]
    fn valid_monthly_input_converts() {
        let schedule =
            RentSchedule::try_from(input("monthly", Some("2024-01-31"), Some(31))).unwrap();
        assert_eq!(schedule.frequency, Frequency::Monthly);
        assert_eq!(schedule.anchor_date, date(2024, 1, 31));
        assert_eq!(schedule.day_of_month, Some(31));
        assert_eq!(schedule.currency, "GBP");
    }

    #[test]
    fn monthly_without_day_of_month_is_rejected() {
        let err = RentSchedule::try_from(input("monthly", Some("2024-01-01"), None)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDayOfMonth(_)));
    }

    #[test]
    fn out_of_range_day_of_month_is_rejected_not_clamped() {
        for day in [0, 32, -1] {
            let err =
                RentSchedule::try_from(input("monthly", Some("2024-01-01"), Some(day))).unwrap_err();
            assert_eq!(err, ScheduleError::InvalidDayOfMonth(day));
        }
    }

    #[test]
    fn weekly_ignores_day_of_month() {
        let schedule =
            RentSchedule::try_from(input("weekly", Some("2024-03-01"), Some(99))).unwrap();
        assert_eq!(schedule.day_of_month, None);
    }

    #[test]
    fn missing_anchor_date_is_rejected() {
        let err = RentSchedule::try_from(input("weekly", None, None)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidAnchorDate(_)));
    }

    #[test]
    fn unparsable_anchor_date_is_rejected() {
        for raw in ["2024-02-30", "01/03/2024", "not a date"] {
            let err = RentSchedule::try_from(input("weekly", Some(raw), None)).unwrap_err();
            assert_eq!(err, ScheduleError::InvalidAnchorDate(raw.to_string()));
        }
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut bad = input("weekly", Some("2024-03-01"), None);
        bad.amount_minor = 0;
        assert_eq!(
            RentSchedule::try_from(bad).unwrap_err(),
            ScheduleError::InvalidAmount(0)
        );
    }

    #[test]
    fn currency_is_normalised_and_checked() {
        let mut lower = input("weekly", Some("2024-03-01"), None);
        lower.currency = Some("eur".to_string());
        assert_eq!(RentSchedule::try_from(lower).unwrap().currency, "EUR");

        let mut bad = input("weekly", Some("2024-03-01"), None);
        bad.currency = Some("EURO".to_string());
        assert!(matches!(
            RentSchedule::try_from(bad),
            Err(ScheduleError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn input_deserializes_from_form_json() {
        let json = r#"{"amount_minor": 120000, "frequency": "monthly", "anchor_date": "2024-01-01", "day_of_month": 1}"#;
        let parsed: RentScheduleInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.frequency, "monthly");
        assert_eq!(parsed.day_of_month, Some(1));
        assert!(parsed.currency.is_none());
    }

    #[test]
    fn schedule_serializes_dates_as_iso() {
        let schedule = monthly_schedule(120_000, date(2024, 1, 1), 1).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["anchor_date"], "2024-01-01");
        assert_eq!(json["frequency"], "monthly");
        assert_eq!(json["day_of_month"], 1);
    }
}
