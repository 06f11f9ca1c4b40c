//! Schedule Service
//!
//! Orchestrates rent schedule use cases:
//! - Saving a tenant's schedule (validated, full overwrite)
//! - Projecting the next due date, for a stored schedule or an ad-hoc one
//! - Writing the projected date back for the dashboard and reminders
//!
//! Date math lives in `domain::projector`; this layer only decides what
//! "now" is and what to persist.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::schedule_config::{
    DEFAULT_MAX_UPCOMING_DATES, DEFAULT_REMINDER_LEAD_DAYS, DEFAULT_UPCOMING_COUNT,
};
use crate::config::Config;
use crate::domain::entities::{
    NewRentSchedule, RentSchedule, RentScheduleInput, RentScheduleRecord, TenantId,
};
use crate::domain::ports::{Clock, RentScheduleRepository};
use crate::domain::projector;
use crate::error::{AppError, DomainError};

/// Tunables for projection responses
#[derive(Debug, Clone, Copy)]
pub struct ProjectionSettings {
    pub reminder_lead_days: i64,
    pub max_upcoming: usize,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            reminder_lead_days: DEFAULT_REMINDER_LEAD_DAYS,
            max_upcoming: DEFAULT_MAX_UPCOMING_DATES,
        }
    }
}

impl From<&Config> for ProjectionSettings {
    fn from(config: &Config) -> Self {
        Self {
            reminder_lead_days: config.reminder_lead_days,
            max_upcoming: config.max_upcoming,
        }
    }
}

/// Result of projecting a schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Reference date the projection was made for
    pub now: NaiveDate,
    pub next_payment_date: NaiveDate,
    /// Upcoming due dates, starting with `next_payment_date`
    pub upcoming: Vec<NaiveDate>,
    pub days_until_due: i64,
    pub reminder_due: bool,
}

/// Service for rent schedule projection and storage
pub struct ScheduleService<R, C>
where
    R: RentScheduleRepository + ?Sized,
    C: Clock + ?Sized,
{
    schedules: Arc<R>,
    clock: Arc<C>,
    settings: ProjectionSettings,
}

impl<R, C> ScheduleService<R, C>
where
    R: RentScheduleRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(schedules: Arc<R>, clock: Arc<C>, settings: ProjectionSettings) -> Self {
        Self {
            schedules,
            clock,
            settings,
        }
    }

    /// Project a schedule as seen on `now` (today's date if omitted)
    ///
    /// `count` upcoming dates are returned, defaulting to a short list and
    /// capped at the configured maximum.
    pub fn project(
        &self,
        schedule: &RentSchedule,
        now: Option<NaiveDate>,
        count: Option<usize>,
    ) -> Result<Projection, AppError> {
        let now = now.unwrap_or_else(|| self.clock.today());
        let count = count
            .unwrap_or(DEFAULT_UPCOMING_COUNT)
            .min(self.settings.max_upcoming);

        let next_payment_date = projector::next_payment_date(schedule, now)?;
        let upcoming = projector::upcoming_payment_dates(schedule, now, count)?;
        let days_until_due = projector::days_until_due(next_payment_date, now);

        tracing::debug!(
            frequency = %schedule.frequency,
            %now,
            %next_payment_date,
            "Projected rent schedule"
        );

        Ok(Projection {
            now,
            next_payment_date,
            upcoming,
            days_until_due,
            reminder_due: days_until_due <= self.settings.reminder_lead_days,
        })
    }

    /// Validate and store a tenant's schedule, replacing any existing one
    pub async fn save_schedule(
        &self,
        tenant_id: TenantId,
        input: RentScheduleInput,
    ) -> Result<RentScheduleRecord, AppError> {
        let schedule = RentSchedule::try_from(input).map_err(|e| {
            tracing::debug!(%tenant_id, error = %e, "Rejected rent schedule");
            e
        })?;

        let record = self
            .schedules
            .upsert(&NewRentSchedule {
                tenant_id,
                schedule,
            })
            .await?;

        tracing::info!(
            %tenant_id,
            schedule_id = %record.id,
            frequency = %record.schedule.frequency,
            "Saved rent schedule"
        );

        Ok(record)
    }

    /// Get a tenant's stored schedule
    pub async fn get_schedule(&self, tenant_id: &TenantId) -> Result<RentScheduleRecord, AppError> {
        self.schedules
            .find_by_tenant(tenant_id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound(format!(
                    "No rent schedule for tenant {}",
                    tenant_id
                )))
            })
    }

    /// Project a tenant's stored schedule and record the next due date
    ///
    /// The write-back is skipped if the schedule was replaced or deleted
    /// after it was loaded, so a stale date never lands on a newer schedule.
    pub async fn next_payment_for_tenant(
        &self,
        tenant_id: &TenantId,
        now: Option<NaiveDate>,
        count: Option<usize>,
    ) -> Result<(RentScheduleRecord, Projection), AppError> {
        let mut record = self.get_schedule(tenant_id).await?;
        let projection = self.project(&record.schedule, now, count)?;

        if record.next_payment_date != Some(projection.next_payment_date) {
            let written = self
                .schedules
                .update_next_payment_date(&record, projection.next_payment_date)
                .await?;

            if written {
                record.next_payment_date = Some(projection.next_payment_date);
            } else {
                tracing::debug!(
                    %tenant_id,
                    schedule_id = %record.id,
                    "Schedule changed during projection, skipped next payment write-back"
                );
            }
        }

        Ok((record, projection))
    }

    /// Remove a tenant's schedule
    pub async fn delete_schedule(&self, tenant_id: &TenantId) -> Result<(), AppError> {
        if !self.schedules.delete_by_tenant(tenant_id).await? {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "No rent schedule for tenant {}",
                tenant_id
            ))));
        }

        tracing::info!(%tenant_id, "Deleted rent schedule");
        Ok(())
    }
}
