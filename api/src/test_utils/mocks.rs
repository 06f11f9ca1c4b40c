//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewRentSchedule, RentScheduleId, RentScheduleRecord, TenantId};
use crate::domain::ports::RentScheduleRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Rent Schedule Repository
// ============================================================================

/// Cloning shares the underlying store, so a test can keep a handle after
/// moving a clone into a service.
#[derive(Clone, Default)]
pub struct InMemoryRentScheduleRepository {
    records: Arc<RwLock<HashMap<TenantId, RentScheduleRecord>>>,
    next_date_writes: Arc<AtomicUsize>,
    fail: bool,
}

impl InMemoryRentScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a record for testing
    pub fn with_record(self, record: RentScheduleRecord) -> Self {
        {
            let mut records = self.records.write().unwrap();
            records.insert(record.tenant_id, record);
        }
        self
    }

    /// Inspect what is stored for a tenant
    pub fn get(&self, tenant_id: &TenantId) -> Option<RentScheduleRecord> {
        self.records.read().unwrap().get(tenant_id).cloned()
    }

    /// Number of `update_next_payment_date` calls that reached the store
    pub fn next_date_writes(&self) -> usize {
        self.next_date_writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RentScheduleRepository for InMemoryRentScheduleRepository {
    async fn find_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<RentScheduleRecord>, DomainError> {
        self.check()?;
        Ok(self.get(tenant_id))
    }

    async fn upsert(&self, new: &NewRentSchedule) -> Result<RentScheduleRecord, DomainError> {
        self.check()?;
        let mut records = self.records.write().unwrap();
        let now = Utc::now();

        let record = match records.get(&new.tenant_id) {
            // Every overwrite must move updated_at forward, even within one clock tick
            Some(existing) => RentScheduleRecord {
                schedule: new.schedule.clone(),
                next_payment_date: None,
                updated_at: now.max(existing.updated_at + Duration::microseconds(1)),
                ..existing.clone()
            },
            None => RentScheduleRecord {
                id: RentScheduleId::new(),
                tenant_id: new.tenant_id,
                schedule: new.schedule.clone(),
                next_payment_date: None,
                created_at: now,
                updated_at: now,
            },
        };

        records.insert(new.tenant_id, record.clone());
        Ok(record)
    }

    async fn update_next_payment_date(
        &self,
        record: &RentScheduleRecord,
        next_payment_date: NaiveDate,
    ) -> Result<bool, DomainError> {
        self.check()?;
        let mut records = self.records.write().unwrap();
        match records.get_mut(&record.tenant_id) {
            Some(stored) if stored.id == record.id && stored.updated_at == record.updated_at => {
                stored.next_payment_date = Some(next_payment_date);
                self.next_date_writes.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_tenant(&self, tenant_id: &TenantId) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.records.write().unwrap().remove(tenant_id).is_some())
    }
}
