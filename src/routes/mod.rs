use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;

use crate::{AlertBoard, ReportStore};

mod alerts;
mod health;
mod hotspots;
mod reports;

// ---

pub type SharedStore = Arc<RwLock<ReportStore>>;
pub type SharedAlerts = Arc<RwLock<AlertBoard>>;

/// State injected into every handler. The store is the single writer target;
/// all mutations go through its write lock.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub alerts: SharedAlerts,
}

impl AppState {
    pub fn new(store: ReportStore, alerts: AlertBoard) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            alerts: Arc::new(RwLock::new(alerts)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(reports::router())
        .merge(hotspots::router())
        .merge(alerts::router())
        .merge(health::router())
        .with_state(state)
}
