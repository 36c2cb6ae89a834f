// src/routes/health.rs
//! Liveness endpoint for the Ocean Guard service.
//!
//! `GET /health` answers as long as the process can serve requests and both
//! shared locks can be taken for reading. The body also carries the current
//! report and active-alert counts, which is handy when poking at a running
//! instance.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    reports: usize,
    active_alerts: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    // ---
    let reports = state.store.read().await.len();
    let active_alerts = state.alerts.read().await.active_count();

    Json(HealthResponse {
        status: "ok",
        reports,
        active_alerts,
    })
}

/// Subrouter with the single `GET /health` route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
