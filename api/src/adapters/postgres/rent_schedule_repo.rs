//! PostgreSQL adapter for RentScheduleRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::entities::{
    Frequency, NewRentSchedule, RentSchedule, RentScheduleId, RentScheduleRecord, TenantId,
};
use crate::domain::ports::RentScheduleRepository;
use crate::entity::rent_schedules;
use crate::error::{DomainError, ScheduleError};

/// PostgreSQL implementation of RentScheduleRepository
pub struct PostgresRentScheduleRepository {
    db: DatabaseConnection,
}

impl PostgresRentScheduleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<rent_schedules::Model>, DomainError> {
        rent_schedules::Entity::find()
            .filter(rent_schedules::Column::TenantId.eq(tenant_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl RentScheduleRepository for PostgresRentScheduleRepository {
    async fn find_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<RentScheduleRecord>, DomainError> {
        self.find_model(tenant_id)
            .await?
            .map(RentScheduleRecord::try_from)
            .transpose()
    }

    async fn upsert(&self, new: &NewRentSchedule) -> Result<RentScheduleRecord, DomainError> {
        use rent_schedules::Column;

        let now = Utc::now().fixed_offset();
        let schedule = &new.schedule;

        let model = rent_schedules::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(new.tenant_id.0),
            amount_minor: Set(schedule.amount_minor),
            currency: Set(schedule.currency.clone()),
            frequency: Set(schedule.frequency.to_string()),
            anchor_date: Set(schedule.anchor_date),
            day_of_month: Set(schedule.day_of_month.map(|d| d as i32)),
            next_payment_date: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // One statement, so concurrent first saves for a tenant cannot race
        // the unique constraint. id and created_at survive an overwrite.
        let saved = rent_schedules::Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::TenantId)
                    .update_columns([
                        Column::AmountMinor,
                        Column::Currency,
                        Column::Frequency,
                        Column::AnchorDate,
                        Column::DayOfMonth,
                        Column::NextPaymentDate,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        saved.try_into()
    }

    async fn update_next_payment_date(
        &self,
        record: &RentScheduleRecord,
        next_payment_date: NaiveDate,
    ) -> Result<bool, DomainError> {
        // updated_at pins the write to the row version the projection was made from
        let result = rent_schedules::Entity::update_many()
            .col_expr(
                rent_schedules::Column::NextPaymentDate,
                Expr::value(next_payment_date),
            )
            .filter(rent_schedules::Column::Id.eq(record.id.0))
            .filter(rent_schedules::Column::UpdatedAt.eq(record.updated_at.fixed_offset()))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_tenant(&self, tenant_id: &TenantId) -> Result<bool, DomainError> {
        let result = rent_schedules::Entity::delete_many()
            .filter(rent_schedules::Column::TenantId.eq(tenant_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
///
/// Stored rows go through the same validation as new input. A row that fails
/// it is reported, not patched up with defaults.
impl TryFrom<rent_schedules::Model> for RentScheduleRecord {
    type Error = DomainError;

    fn try_from(model: rent_schedules::Model) -> Result<Self, Self::Error> {
        let id = model.id;
        let corrupt = |e: ScheduleError| {
            DomainError::Database(format!("Stored rent schedule {} is invalid: {}", id, e))
        };

        let frequency: Frequency = model.frequency.parse().map_err(corrupt)?;
        let schedule = RentSchedule::new(
            model.amount_minor,
            &model.currency,
            frequency,
            model.anchor_date,
            model.day_of_month.map(i64::from),
        )
        .map_err(corrupt)?;

        Ok(RentScheduleRecord {
            id: RentScheduleId(model.id),
            tenant_id: TenantId(model.tenant_id),
            schedule,
            next_payment_date: model.next_payment_date,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}
