//! Schedule handlers
//!
//! Endpoints for a tenant's stored rent schedule. Tenant ids come from the
//! external identity provider; authentication happens in front of this API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::projections::{parse_now, ProjectionResponse};
use crate::domain::entities::{RentScheduleId, RentScheduleInput, RentScheduleRecord, TenantId};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the next payment endpoint
#[derive(Debug, Deserialize)]
pub struct NextPaymentQuery {
    /// Reference date (`YYYY-MM-DD`); today if omitted
    pub now: Option<String>,
    /// Taken raw so a malformed value gets the JSON error body
    pub count: Option<String>,
}

/// Response body for the next payment endpoint
#[derive(Debug, Serialize)]
pub struct NextPaymentResponse {
    pub tenant_id: TenantId,
    pub schedule_id: RentScheduleId,
    #[serde(flatten)]
    pub projection: ProjectionResponse,
}

/// Parse an optional `count` override
fn parse_count(raw: Option<&str>) -> Result<Option<usize>, AppError> {
    raw.map(|s| {
        s.trim().parse().map_err(|_| {
            AppError::BadRequest(format!("count must be a non-negative integer, got {:?}", s))
        })
    })
    .transpose()
}

/// GET /tenants/:tenant_id/schedule
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<Json<RentScheduleRecord>, AppError> {
    let record = state
        .schedule_service
        .get_schedule(&TenantId(tenant_id))
        .await?;
    Ok(Json(record))
}

/// PUT /tenants/:tenant_id/schedule
///
/// Create or fully replace the tenant's schedule.
pub async fn put_schedule(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(input): Json<RentScheduleInput>,
) -> Result<Json<RentScheduleRecord>, AppError> {
    let record = state
        .schedule_service
        .save_schedule(TenantId(tenant_id), input)
        .await?;
    Ok(Json(record))
}

/// DELETE /tenants/:tenant_id/schedule
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .schedule_service
        .delete_schedule(&TenantId(tenant_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /tenants/:tenant_id/schedule/next-payment
///
/// Project the stored schedule and record the result for reminders.
pub async fn get_next_payment(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<NextPaymentQuery>,
) -> Result<Json<NextPaymentResponse>, AppError> {
    let now = parse_now(query.now.as_deref())?;
    let count = parse_count(query.count.as_deref())?;
    let (record, projection) = state
        .schedule_service
        .next_payment_for_tenant(&TenantId(tenant_id), now, count)
        .await?;

    Ok(Json(NextPaymentResponse {
        tenant_id: record.tenant_id,
        schedule_id: record.id,
        projection: ProjectionResponse::new(&record.schedule, projection),
    }))
}
