//! Demo data loaded at startup when `SEED_DEMO_REPORTS` / `SEED_DEMO_ALERTS`
//! are enabled.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::alerts::{Alert, AlertStatus};
use crate::models::{report_time, Coordinates, NewReport, ReportSource, Severity};

// ---

fn at(raw: &str) -> Result<NaiveDateTime> {
    report_time::parse(raw).with_context(|| format!("Invalid demo timestamp {:?}", raw))
}

#[allow(clippy::too_many_arguments)]
fn report(
    date_time: &str,
    hazard_type: &str,
    location: &str,
    source: ReportSource,
    severity: Severity,
    lat: f64,
    lng: f64,
    description: &str,
    reporter_info: &str,
) -> Result<NewReport> {
    // ---
    Ok(NewReport {
        date_time: at(date_time)?,
        hazard_type: hazard_type.to_string(),
        location: location.to_string(),
        coordinates: Coordinates { lat, lng },
        source,
        severity,
        description: description.to_string(),
        reporter_info: Some(reporter_info.to_string()),
    })
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    hazard_type: &str,
    region: &str,
    severity: Severity,
    status: AlertStatus,
    issued: &str,
    recipients: u32,
    channels: &[&str],
    description: &str,
) -> Result<Alert> {
    // ---
    Ok(Alert {
        id: id.to_string(),
        hazard_type: hazard_type.to_string(),
        region: region.to_string(),
        severity,
        status,
        issued: at(issued)?,
        recipients,
        channels: channels.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
    })
}

/// The five reports the dashboard opens with. Submitted in this order they
/// become `RPT-001` through `RPT-005`.
pub fn demo_reports() -> Result<Vec<NewReport>> {
    // ---
    Ok(vec![
        report(
            "2024-12-25 14:30",
            "Tsunami Warning",
            "Santa Monica, CA",
            ReportSource::Citizen,
            Severity::High,
            34.0522,
            -118.2437,
            "Large waves observed approaching shoreline. Multiple citizens reporting \
             unusual wave patterns and rapid water recession.",
            "Local resident, beachfront property",
        )?,
        report(
            "2024-12-25 12:15",
            "Coastal Flooding",
            "Miami Beach, FL",
            ReportSource::Social,
            Severity::Medium,
            25.7617,
            -80.1918,
            "Street flooding reported on Ocean Drive. Water levels approximately \
             1-2 feet above normal high tide levels.",
            "Tourist social media post",
        )?,
        report(
            "2024-12-25 10:45",
            "Storm Surge",
            "Virginia Beach, VA",
            ReportSource::Official,
            Severity::High,
            36.8529,
            -75.9780,
            "Storm surge heights reaching 4-6 feet above normal. Significant coastal \
             inundation affecting beachfront properties.",
            "National Weather Service",
        )?,
        report(
            "2024-12-24 18:20",
            "High Winds",
            "San Francisco, CA",
            ReportSource::Citizen,
            Severity::Low,
            37.7749,
            -122.4194,
            "Sustained winds of 45+ mph reported along coastal areas. Minor property \
             damage to outdoor structures.",
            "Harbor patrol officer",
        )?,
        report(
            "2024-12-24 16:10",
            "Coastal Flooding",
            "Atlantic City, NJ",
            ReportSource::Social,
            Severity::Medium,
            39.3643,
            -74.4229,
            "Parking lots along boardwalk experiencing flooding. Water depth \
             estimated at 6-12 inches.",
            "Multiple social media reports",
        )?,
    ])
}

/// The alerts board contents at startup: two active, one resolved.
pub fn demo_alerts() -> Result<Vec<Alert>> {
    // ---
    Ok(vec![
        alert(
            "ALT-001",
            "Tsunami Warning",
            "Santa Monica Bay, CA",
            Severity::Critical,
            AlertStatus::Active,
            "2024-12-25 14:30",
            1247,
            &["SMS", "EMAIL", "PUSH"],
            "Tsunami warning issued for coastal areas. Immediate evacuation recommended.",
        )?,
        alert(
            "ALT-002",
            "Coastal Flood Advisory",
            "Miami Beach, FL",
            Severity::High,
            AlertStatus::Active,
            "2024-12-25 12:15",
            856,
            &["EMAIL", "PUSH"],
            "Minor coastal flooding expected during high tide periods.",
        )?,
        alert(
            "ALT-003",
            "Storm Surge Watch",
            "Virginia Beach, VA",
            Severity::Medium,
            AlertStatus::Resolved,
            "2024-12-24 18:20",
            623,
            &["SMS", "EMAIL"],
            "Storm surge watch canceled. Conditions have improved.",
        )?,
    ])
}
