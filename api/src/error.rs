//! Unified error types for the Rent Credit API
//!
//! This module defines error types for each layer:
//! - `ScheduleError`: Rent schedule contract violations (projector and boundary validation)
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rent schedule validation errors
///
/// These are deterministic input-contract violations. Nothing here is transient,
/// so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid frequency: {0:?} (expected monthly, weekly or fortnightly)")]
    InvalidFrequency(String),

    #[error("Invalid day of month: {0} (expected 1-31)")]
    InvalidDayOfMonth(i64),

    #[error("Invalid anchor date: {0}")]
    InvalidAnchorDate(String),

    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(i64),

    #[error("Invalid currency: {0:?} (expected a 3-letter ISO code)")]
    InvalidCurrency(String),

    #[error("Projected date is outside the supported calendar range")]
    DateOutOfRange,
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Database error: {0}")]
    Database(String),
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        AppError::Domain(DomainError::Schedule(e))
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Schedule(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid rent schedule",
                Some(e.to_string()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
