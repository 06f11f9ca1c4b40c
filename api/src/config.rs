use std::env;
use std::str::FromStr;

use crate::app::schedule_config::{
    DEFAULT_MAX_UPCOMING_DATES, DEFAULT_PORT, DEFAULT_REMINDER_LEAD_DAYS,
    MAX_UPCOMING_DATES_CEILING,
};
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Offset from UTC (minutes) used to turn the system clock into a calendar date
    pub calendar_utc_offset_minutes: i32,
    /// A reminder is due when the next payment is this many days away or fewer
    pub reminder_lead_days: i64,
    /// Upper bound on the number of upcoming dates a single projection returns
    pub max_upcoming: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let config = Self {
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            calendar_utc_offset_minutes: parse_or(&lookup, "CALENDAR_UTC_OFFSET_MINUTES", 0)?,
            reminder_lead_days: parse_or(&lookup, "REMINDER_LEAD_DAYS", DEFAULT_REMINDER_LEAD_DAYS)?,
            max_upcoming: parse_or(&lookup, "MAX_UPCOMING_DATES", DEFAULT_MAX_UPCOMING_DATES)?,
        };

        // chrono::FixedOffset only accepts offsets strictly inside +/-24h
        if config.calendar_utc_offset_minutes.abs() >= 24 * 60 {
            return Err(ConfigError::Invalid {
                name: "CALENDAR_UTC_OFFSET_MINUTES",
                value: config.calendar_utc_offset_minutes.to_string(),
            });
        }
        if config.reminder_lead_days < 0 {
            return Err(ConfigError::Invalid {
                name: "REMINDER_LEAD_DAYS",
                value: config.reminder_lead_days.to_string(),
            });
        }

        if config.max_upcoming > MAX_UPCOMING_DATES_CEILING {
            return Err(ConfigError::Invalid {
                name: "MAX_UPCOMING_DATES",
                value: config.max_upcoming.to_string(),
            });
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
