//! Core of the Ocean Guard coastal-hazard report dashboard.
//!
//! - [`store::ReportStore`] owns the reports and their verification status
//! - [`hotspots::derive_hotspots`] projects verified reports into regional clusters
//! - [`alerts::AlertBoard`] keeps mock alert broadcasts
//! - [`routes::router`] exposes all of it over HTTP
//!
//! The binary in `main.rs` only wires configuration, logging, and the listener.

pub mod alerts;
pub mod config;
pub mod export;
pub mod hotspots;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;

pub use config::Config;

// Re-exported so routes/*.rs only need their parent module, not the file
// layout of the domain code.
pub use alerts::{AlertBoard, AlertDraft, AlertError};
pub use hotspots::{derive_hotspots, Hotspot};
pub use models::{NewReport, Report, ReportStatus, Severity};
pub use store::{ReportQuery, ReportStore, StatusSummary};
