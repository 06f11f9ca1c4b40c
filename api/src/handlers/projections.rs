//! Projection handlers
//!
//! Stateless projection of an ad-hoc schedule, used by the onboarding form
//! preview and the schedule editor before anything is saved.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app::Projection;
use crate::domain::entities::{RentSchedule, RentScheduleInput, DATE_FORMAT};
use crate::error::AppError;
use crate::report::render_summary;
use crate::AppState;

/// Request body for an ad-hoc projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub schedule: RentScheduleInput,
    /// Reference date (`YYYY-MM-DD`); today if omitted
    #[serde(default)]
    pub now: Option<String>,
    /// Number of upcoming dates to list
    #[serde(default)]
    pub count: Option<usize>,
}

/// Projection as returned to the dashboard and report generator
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub now: NaiveDate,
    pub next_payment_date: NaiveDate,
    pub upcoming: Vec<NaiveDate>,
    pub days_until_due: i64,
    pub reminder_due: bool,
    pub summary: String,
}

impl ProjectionResponse {
    pub fn new(schedule: &RentSchedule, projection: Projection) -> Self {
        let summary = render_summary(schedule, &projection);
        Self {
            now: projection.now,
            next_payment_date: projection.next_payment_date,
            upcoming: projection.upcoming,
            days_until_due: projection.days_until_due,
            reminder_due: projection.reminder_due,
            summary,
        }
    }
}

/// Parse an optional `now` override
pub(crate) fn parse_now(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|_| AppError::BadRequest(format!("now must be a YYYY-MM-DD date, got {:?}", s)))
    })
    .transpose()
}

/// POST /projections
///
/// Project a schedule without storing it.
pub async fn create_projection(
    State(state): State<AppState>,
    Json(request): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, AppError> {
    let now = parse_now(request.now.as_deref())?;
    let schedule = RentSchedule::try_from(request.schedule)?;

    let projection = state
        .schedule_service
        .project(&schedule, now, request.count)?;

    Ok(Json(ProjectionResponse::new(&schedule, projection)))
}
