//! Status Routes
//!
//! Service info and health checks.
//!
//! Routes:
//! - GET / - Service info
//! - GET /health - Health probe
//! - GET /health/live - Liveness check (server responding)

use std::sync::OnceLock;
use std::time::Instant;

use axum::{http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Name reported by the health probe.
pub const SERVICE_NAME: &str = "pet-adoption-api";

static STARTUP_TIME: OnceLock<Instant> = OnceLock::new();

/// Initialize startup time. Call this once at server start.
pub fn init_startup_time() {
    let _ = STARTUP_TIME.get_or_init(Instant::now);
}

/// Get uptime in seconds since server start.
fn get_uptime_seconds() -> u64 {
    STARTUP_TIME.get().map(|start| start.elapsed().as_secs()).unwrap_or(0)
}

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: String,
    pub version: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub uptime_seconds: u64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
#[axum::debug_handler]
async fn service_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Pet adoption API running".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Basic health check.
///
/// GET /health
#[axum::debug_handler]
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".into(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.into(),
        uptime_seconds: get_uptime_seconds(),
    })
}

/// Liveness check.
///
/// GET /health/live
#[axum::debug_handler]
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
