//! Rent Credit API Server
//!
//! Backend for rent payment tracking and rental credit building. Projects
//! tenants' recurring rent schedules to their next due dates for the
//! dashboard, reminders and generated reports.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod report;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresRentScheduleRepository, SystemClock};
use app::{ProjectionSettings, ScheduleService};
use config::Config;
use domain::ports::{Clock, RentScheduleRepository};

/// Schedule service as held by the router, behind trait objects so tests can
/// swap in in-memory adapters
pub type SharedScheduleService = ScheduleService<dyn RentScheduleRepository, dyn Clock>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub schedule_service: Arc<SharedScheduleService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/projections", post(handlers::create_projection))
        .route(
            "/tenants/:tenant_id/schedule",
            get(handlers::get_schedule)
                .put(handlers::put_schedule)
                .delete(handlers::delete_schedule),
        )
        .route(
            "/tenants/:tenant_id/schedule/next-payment",
            get(handlers::get_next_payment),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rentcredit_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rent Credit API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let schedule_repo: Arc<dyn RentScheduleRepository> =
        Arc::new(PostgresRentScheduleRepository::new(db));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.calendar_utc_offset_minutes)?);

    // Create application services
    let schedule_service = Arc::new(ScheduleService::new(
        schedule_repo,
        clock,
        ProjectionSettings::from(&config),
    ));

    let app = build_router(AppState { schedule_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
