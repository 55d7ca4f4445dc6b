use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the relational mirror is reachable.
    pub db_healthy: bool,
    /// Whether the primary document store is connected.
    pub primary_available: bool,
}

/// GET /health -- returns service and backend health.
///
/// The site keeps serving from either backend alone, so status is `ok`
/// while at least one is up.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = sriweb_db::health_check(&state.pool).await.is_ok();
    let primary_available = state.probe.is_primary_available().await;

    let status = match (primary_available, db_healthy) {
        (true, true) => "ok",
        (false, false) => "down",
        _ => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        primary_available,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
