use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::AppState;
use crate::AlertDraft;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/alerts", get(list_alerts).post(create_alert))
        .route("/alerts/{id}/resolve", post(resolve_alert))
}

async fn list_alerts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.alerts.read().await.list().to_vec())
}

async fn create_alert(
    State(state): State<AppState>,
    Json(draft): Json<AlertDraft>,
) -> impl IntoResponse {
    // ---
    match state.alerts.write().await.compose(draft) {
        Ok(alert) => (StatusCode::CREATED, Json(json!(alert))),
        Err(e) => {
            warn!("Rejected alert draft: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

async fn resolve_alert(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // ---
    match state.alerts.write().await.resolve(&id) {
        Some(alert) => (StatusCode::OK, Json(json!(alert))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("alert {} not found", id) })),
        ),
    }
}
