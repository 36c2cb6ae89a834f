use std::net::SocketAddr;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use ocean_guard::routes::{router, AppState};
use ocean_guard::{seed, AlertBoard, ReportStore};

#[derive(Debug, Deserialize)]
struct Report {
    id: String,
    location: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct Hotspot {
    region: String,
    report_count: usize,
    risk_level: String,
    trend: String,
    last_report: String,
}

/// Serve a freshly seeded app on an ephemeral port.
async fn spawn_app() -> Result<SocketAddr> {
    // ---
    let store = ReportStore::with_reports(seed::demo_reports()?);
    let alerts = AlertBoard::with_alerts(seed::demo_alerts()?);
    let app = router(AppState::new(store, alerts));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });
    Ok(addr)
}

#[tokio::test]
async fn health_reports_counts() -> Result<()> {
    // ---
    let addr = spawn_app().await?;
    let body: Value = reqwest::get(format!("http://{addr}/health"))
        .await?
        .json()
        .await?;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["reports"], 5);
    assert_eq!(body["active_alerts"], 2);
    Ok(())
}

#[tokio::test]
async fn verify_and_flag_drive_status_lists() -> Result<()> {
    // ---
    let addr = spawn_app().await?;
    let base = format!("http://{addr}");
    let client = Client::new();

    let all: Vec<Report> = client.get(format!("{base}/reports")).send().await?.json().await?;
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|r| r.status == "Unverified"));

    let verified: Report = client
        .post(format!("{base}/reports/RPT-002/verify"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(verified.id, "RPT-002");
    assert_eq!(verified.status, "Verified");

    client
        .post(format!("{base}/reports/RPT-003/flag"))
        .send()
        .await?
        .error_for_status()?;

    let verified: Vec<Report> = client
        .get(format!("{base}/reports?status=Verified"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(verified.len(), 1);
    assert_eq!(verified[0].location, "Miami Beach, FL");

    let summary: Value = client
        .get(format!("{base}/reports/summary"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        summary,
        json!({ "unverified": 3, "verified": 1, "flagged": 1, "total": 5 })
    );

    let missing = client
        .post(format!("{base}/reports/RPT-999/verify"))
        .send()
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn hotspots_follow_verified_reports() -> Result<()> {
    // ---
    let addr = spawn_app().await?;
    let base = format!("http://{addr}");
    let client = Client::new();

    let hotspots: Vec<Hotspot> = client.get(format!("{base}/hotspots")).send().await?.json().await?;
    assert!(hotspots.is_empty(), "nothing verified yet");

    // RPT-001 (Santa Monica, High) and RPT-004 (San Francisco, Low) share region CA
    for id in ["RPT-001", "RPT-004", "RPT-002"] {
        client
            .post(format!("{base}/reports/{id}/verify"))
            .send()
            .await?
            .error_for_status()?;
    }

    let hotspots: Vec<Hotspot> = client.get(format!("{base}/hotspots")).send().await?.json().await?;
    assert_eq!(hotspots.len(), 1);
    assert_eq!(hotspots[0].region, "CA");
    assert_eq!(hotspots[0].report_count, 2);
    assert_eq!(hotspots[0].risk_level, "Medium");
    assert_eq!(hotspots[0].trend, "stable");
    assert_eq!(hotspots[0].last_report, "2024-12-25 14:30");

    // Flagging a member dissolves the hotspot.
    client
        .post(format!("{base}/reports/RPT-004/flag"))
        .send()
        .await?
        .error_for_status()?;
    let hotspots: Vec<Hotspot> = client.get(format!("{base}/hotspots")).send().await?.json().await?;
    assert!(hotspots.is_empty());

    Ok(())
}

#[tokio::test]
async fn submitted_reports_start_unverified() -> Result<()> {
    // ---
    let addr = spawn_app().await?;
    let base = format!("http://{addr}");
    let client = Client::new();

    let response = client
        .post(format!("{base}/reports"))
        .json(&json!({
            "date_time": "2024-12-26 08:00",
            "hazard_type": "Rip Current",
            "location": "Malibu, CA",
            "coordinates": { "lat": 34.0259, "lng": -118.7798 },
            "source": "Citizen Report",
            "severity": "High",
            "description": "Strong rip currents pulling swimmers offshore."
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Report = response.json().await?;
    assert_eq!(created.id, "RPT-006");
    assert_eq!(created.status, "Unverified");

    let found: Vec<Report> = client
        .get(format!("{base}/reports?search=malibu"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "RPT-006");

    Ok(())
}

#[tokio::test]
async fn export_csv_lists_all_reports() -> Result<()> {
    // ---
    let addr = spawn_app().await?;
    let response = reqwest::get(format!("http://{addr}/reports/export.csv")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/csv")
    );

    let body = response.text().await?;
    assert_eq!(body.lines().count(), 6);
    assert!(body.starts_with("ID,Date/Time,Hazard Type,Location,Source,Status,Severity"));
    Ok(())
}

#[tokio::test]
async fn alerts_compose_and_resolve() -> Result<()> {
    // ---
    let addr = spawn_app().await?;
    let base = format!("http://{addr}");
    let client = Client::new();

    let rejected = client
        .post(format!("{base}/alerts"))
        .json(&json!({ "hazard_type": "Storm Surge", "region": "VA", "message": "" }))
        .send()
        .await?;
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let created = client
        .post(format!("{base}/alerts"))
        .json(&json!({
            "hazard_type": "Storm Surge",
            "region": "Virginia Beach, VA",
            "severity": "Critical",
            "message": "Move to higher ground.",
            "channels": { "sms": true, "email": false, "push": true }
        }))
        .send()
        .await?;
    assert_eq!(created.status(), StatusCode::CREATED);
    let alert: Value = created.json().await?;
    assert_eq!(alert["id"], "ALT-004");
    assert_eq!(alert["channels"], json!(["SMS", "PUSH"]));
    assert_eq!(alert["status"], "Active");

    let resolved: Value = client
        .post(format!("{base}/alerts/ALT-004/resolve"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(resolved["status"], "Resolved");

    let alerts: Vec<Value> = client.get(format!("{base}/alerts")).send().await?.json().await?;
    assert_eq!(alerts.len(), 4);
    assert_eq!(alerts[0]["issued"], "2024-12-25 14:30");
    assert_eq!(alerts[3]["description"], "Move to higher ground.");

    let health: Value = reqwest::get(format!("{base}/health")).await?.json().await?;
    assert_eq!(health["active_alerts"], 2);
    Ok(())
}
