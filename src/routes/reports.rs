use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{debug, error, info};

use super::AppState;
use crate::{export, NewReport, ReportQuery};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/reports", get(list_reports).post(submit_report))
        .route("/reports/summary", get(summary))
        .route("/reports/export.csv", get(export_csv))
        .route("/reports/{id}", get(get_report))
        .route("/reports/{id}/verify", post(verify_report))
        .route("/reports/{id}/flag", post(flag_report))
}

async fn list_reports(
    Query(query): Query<ReportQuery>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // ---
    debug!("GET /reports - {:?}", query);
    let reports = state.store.read().await.search(&query);
    info!("Returning {} reports", reports.len());
    Json(reports)
}

async fn submit_report(
    State(state): State<AppState>,
    Json(new): Json<NewReport>,
) -> impl IntoResponse {
    // ---
    let report = state.store.write().await.submit(new);
    (StatusCode::CREATED, Json(report))
}

async fn summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.read().await.summary())
}

async fn get_report(Path(id): Path<String>, State(state): State<AppState>) -> impl IntoResponse {
    // ---
    match state.store.read().await.get(&id) {
        Some(report) => (StatusCode::OK, Json(json!(report))).into_response(),
        None => not_found(&id),
    }
}

async fn verify_report(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // ---
    let mut store = state.store.write().await;
    if !store.verify(&id) {
        return not_found(&id);
    }
    (StatusCode::OK, Json(json!(store.get(&id)))).into_response()
}

async fn flag_report(Path(id): Path<String>, State(state): State<AppState>) -> impl IntoResponse {
    // ---
    let mut store = state.store.write().await;
    if !store.flag(&id) {
        return not_found(&id);
    }
    (StatusCode::OK, Json(json!(store.get(&id)))).into_response()
}

async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    // ---
    let store = state.store.read().await;
    match export::reports_to_csv(store.list_all()) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"ocean-guard-reports.csv\"",
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to export reports: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to export reports" })),
            )
                .into_response()
        }
    }
}

fn not_found(id: &str) -> axum::response::Response {
    // ---
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("report {} not found", id) })),
    )
        .into_response()
}
