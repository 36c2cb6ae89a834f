//! Application entry point for the `ocean-guard` backend service.
//!
//! This binary orchestrates the startup sequence for the report dashboard API:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Building the report store (optionally seeded with demo reports)
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `OCEAN_GUARD_HOST` / `OCEAN_GUARD_PORT` (optional) – listen address
//! - `SEED_DEMO_REPORTS` / `SEED_DEMO_ALERTS` (optional) – load demo data (default: true)
//! - `OCEAN_GUARD_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `OCEAN_GUARD_SPAN_EVENTS` (optional) – span event mode for tracing
use std::{env, io::IsTerminal};

use anyhow::{Context, Result};
use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use ocean_guard::routes::{self, AppState};
use ocean_guard::{config, seed, AlertBoard, ReportStore};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenv().ok();
    init_tracing();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let store = if cfg.seed_demo_reports {
        ReportStore::with_reports(seed::demo_reports()?)
    } else {
        ReportStore::new()
    };
    tracing::info!("Report store ready with {} reports", store.len());

    let alerts = if cfg.seed_demo_alerts {
        AlertBoard::with_alerts(seed::demo_alerts()?)
    } else {
        AlertBoard::new()
    };
    tracing::info!("Alert board ready with {} alerts", alerts.list().len());

    // Build app from routes gateway (EMBP)
    let app: Router = routes::router(AppState::new(store, alerts));

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// - Color output follows `FORCE_COLOR` (`1|true|yes`, `0|false|no`),
///   otherwise TTY detection
/// - `OCEAN_GUARD_SPAN_EVENTS`: `"full"` or `"enter_exit"`, otherwise CLOSE only
/// - Level from `RUST_LOG` if set, else `OCEAN_GUARD_LOG_LEVEL` (default `debug`)
///
/// Call once at startup, before any tracing macro fires.
fn init_tracing() {
    // ---
    let span_events = match env::var("OCEAN_GUARD_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("OCEAN_GUARD_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},hyper=info"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
