//! Data models for coastal-hazard incident reports.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---

/// Verification lifecycle of a report. Exactly one at a time, no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Unverified,
    Verified,
    Flagged,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [Self::Unverified, Self::Verified, Self::Flagged];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "Unverified",
            Self::Verified => "Verified",
            Self::Flagged => "Flagged",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered severity scale. `Critical` only shows up on alerts in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportSource {
    #[serde(rename = "Citizen Report")]
    Citizen,
    #[serde(rename = "Social Media")]
    Social,
    Official,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "Citizen Report",
            Self::Social => "Social Media",
            Self::Official => "Official",
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A single hazard observation as held by the report store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    // ---
    pub id: String,
    #[serde(with = "report_time")]
    pub date_time: NaiveDateTime,
    pub hazard_type: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub source: ReportSource,
    pub severity: Severity,
    pub description: String,
    pub reporter_info: Option<String>,
    pub status: ReportStatus,
}

/// Submission payload. The store assigns the id and the initial status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    // ---
    #[serde(with = "report_time")]
    pub date_time: NaiveDateTime,
    pub hazard_type: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub source: ReportSource,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub reporter_info: Option<String>,
}

impl NewReport {
    /// Build the stored report. Every report starts out `Unverified`.
    pub fn into_report(self, id: String) -> Report {
        // ---
        Report {
            id,
            date_time: self.date_time,
            hazard_type: self.hazard_type,
            location: self.location,
            coordinates: self.coordinates,
            source: self.source,
            severity: self.severity,
            description: self.description,
            reporter_info: self.reporter_info,
            status: ReportStatus::Unverified,
        }
    }
}

/// Wire format for report timestamps, e.g. `2024-12-25 14:30`.
pub mod report_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> chrono::ParseResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, FORMAT)
    }
}
