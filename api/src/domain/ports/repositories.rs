//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{NewRentSchedule, RentScheduleRecord, TenantId};
use crate::error::DomainError;

/// Repository for tenant rent schedules
///
/// Each tenant has at most one schedule. Saving replaces it wholesale.
#[async_trait]
pub trait RentScheduleRepository: Send + Sync {
    /// Find the schedule belonging to a tenant
    async fn find_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<RentScheduleRecord>, DomainError>;

    /// Create the tenant's schedule or overwrite the existing one
    ///
    /// Overwriting clears any previously stored next payment date.
    async fn upsert(&self, schedule: &NewRentSchedule) -> Result<RentScheduleRecord, DomainError>;

    /// Store the most recently projected due date for `record`
    ///
    /// Only writes if the stored row is still the one `record` was loaded
    /// from (same id and `updated_at`). Returns false if it was replaced or
    /// deleted in the meantime.
    async fn update_next_payment_date(
        &self,
        record: &RentScheduleRecord,
        next_payment_date: NaiveDate,
    ) -> Result<bool, DomainError>;

    /// Delete the tenant's schedule. Returns false if there was none.
    async fn delete_by_tenant(&self, tenant_id: &TenantId) -> Result<bool, DomainError>;
}
