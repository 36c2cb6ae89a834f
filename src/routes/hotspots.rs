use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tracing::info;

use super::AppState;
use crate::{derive_hotspots, ReportStatus};

// ---

pub fn router() -> Router<AppState> {
    Router::new().route("/hotspots", get(handler))
}

/// Recomputed from a fresh snapshot of verified reports on every call.
async fn handler(State(state): State<AppState>) -> impl IntoResponse {
    // ---
    let verified = state
        .store
        .read()
        .await
        .list_by_status(ReportStatus::Verified);

    let hotspots = derive_hotspots(&verified);
    info!(
        "GET /hotspots - {} hotspots from {} verified reports",
        hotspots.len(),
        verified.len()
    );
    Json(hotspots)
}
