//! Hotspot derivation: groups verified reports into regional risk clusters.
//!
//! A hotspot is a view, not stored state. [`derive_hotspots`] is a pure
//! function over a snapshot of verified reports and is recomputed on every
//! read.
//!
//! Grouping rules:
//! - region key is the second comma-separated token of the location label,
//!   trimmed (`"Santa Monica, CA"` -> `"CA"`); labels without one group
//!   under the whole label
//! - a region needs at least [`MIN_REPORTS`] verified reports
//! - two or more `High` members give `High` risk, one gives `Medium`,
//!   none gives `Low`
//! - `High` risk is reported as an `increasing` trend, everything else as
//!   `stable`
//! - output is ordered by report count, largest first; equal counts keep
//!   the order in which their regions were first seen

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{report_time, Coordinates, Report, ReportStatus, Severity};

// ---

/// Minimum number of verified reports before a region counts as a hotspot.
pub const MIN_REPORTS: usize = 2;

/// Number of `High` severity reports that makes a region high risk.
pub const HIGH_RISK_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    // ---
    /// Grouping key, e.g. `CA`.
    pub region: String,
    /// Location label of the most recent report in the region.
    pub location: String,
    pub risk_level: RiskLevel,
    pub trend: Trend,
    pub report_count: usize,
    #[serde(with = "report_time")]
    pub last_report: NaiveDateTime,
    pub coordinates: Coordinates,
    pub description: String,
    pub risk_factors: Vec<String>,
    /// Member reports, most recent first.
    pub reports: Vec<Report>,
}

/// Extract the grouping key from a location label. Never fails.
pub fn region_key(location: &str) -> &str {
    // ---
    match location.split(',').nth(1).map(str::trim) {
        Some(region) if !region.is_empty() => region,
        _ => location,
    }
}

/// Derive ranked hotspots from a set of reports.
///
/// Reports that are not `Verified` are skipped here as well, so callers may
/// pass either `list_by_status(Verified)` or the full list.
pub fn derive_hotspots<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Vec<Hotspot> {
    // ---
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Report>> = HashMap::new();

    for report in reports {
        if report.status != ReportStatus::Verified {
            continue;
        }
        let key = region_key(&report.location);
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(report);
    }

    let mut hotspots: Vec<Hotspot> = order
        .into_iter()
        .filter_map(|key| {
            let members = groups.remove(key)?;
            (members.len() >= MIN_REPORTS).then(|| build_hotspot(key, members))
        })
        .collect();

    // `sort_by` is stable, so equal counts keep discovery order
    hotspots.sort_by(|a, b| b.report_count.cmp(&a.report_count));

    tracing::debug!("Derived {} hotspots", hotspots.len());
    hotspots
}

pub fn risk_level(high_severity_count: usize) -> RiskLevel {
    // ---
    if high_severity_count >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if high_severity_count >= 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn trend(risk: RiskLevel) -> Trend {
    match risk {
        RiskLevel::High => Trend::Increasing,
        RiskLevel::Medium | RiskLevel::Low => Trend::Stable,
    }
}

// ---

fn build_hotspot(key: &str, mut members: Vec<&Report>) -> Hotspot {
    // ---
    // Newest first; ties keep encounter order.
    members.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    let latest = members[0];

    let high_count = members
        .iter()
        .filter(|r| r.severity == Severity::High)
        .count();
    let risk_level = risk_level(high_count);

    let severity_factor = if high_count > 0 {
        "High severity events"
    } else {
        "Moderate severity events"
    };

    let count = members.len();
    Hotspot {
        region: key.to_string(),
        location: latest.location.clone(),
        risk_level,
        trend: trend(risk_level),
        report_count: count,
        last_report: latest.date_time,
        coordinates: latest.coordinates,
        description: format!(
            "{} verified {} in this region",
            count,
            if count == 1 { "incident" } else { "incidents" }
        ),
        risk_factors: vec![
            "Multiple verified incidents".to_string(),
            "Geographic vulnerability".to_string(),
            severity_factor.to_string(),
        ],
        reports: members.into_iter().cloned().collect(),
    }
}
