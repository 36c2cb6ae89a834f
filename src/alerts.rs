//! Mock alert broadcasts.
//!
//! Alerts are composed from a draft, validated, and kept on an in-memory
//! board. Nothing leaves the process: "sending" is a log line listing the
//! channels that would have been used.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{report_time, Severity};

// ---

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("alert type must not be empty")]
    MissingType,
    #[error("alert region must not be empty")]
    MissingRegion,
    #[error("alert message must not be empty")]
    MissingMessage,
    #[error("at least one delivery channel must be selected")]
    NoChannels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channels {
    pub sms: bool,
    pub email: bool,
    pub push: bool,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            sms: true,
            email: true,
            push: true,
        }
    }
}

impl Channels {
    /// Upper-case names of the enabled channels, in fixed order.
    pub fn selected(&self) -> Vec<String> {
        // ---
        [("SMS", self.sms), ("EMAIL", self.email), ("PUSH", self.push)]
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

fn default_severity() -> Severity {
    Severity::Medium
}

/// Form contents of the "create alert" dialog.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertDraft {
    pub hazard_type: String,
    pub region: String,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub channels: Channels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub hazard_type: String,
    pub region: String,
    pub severity: Severity,
    pub status: AlertStatus,
    #[serde(with = "report_time")]
    pub issued: NaiveDateTime,
    /// Audience size. Always 0 for composed alerts since nothing is delivered.
    pub recipients: u32,
    pub channels: Vec<String>,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    next_seq: u32,
}

impl AlertBoard {
    // ---
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing alerts. Composed alerts get ids after the highest
    /// `ALT-NNN` already on the board.
    pub fn with_alerts(alerts: impl IntoIterator<Item = Alert>) -> Self {
        // ---
        let alerts: Vec<Alert> = alerts.into_iter().collect();
        let next_seq = alerts
            .iter()
            .filter_map(|a| alert_seq(&a.id))
            .max()
            .unwrap_or(0);

        Self { alerts, next_seq }
    }

    /// Validate a draft and record it as an active alert.
    pub fn compose(&mut self, draft: AlertDraft) -> Result<Alert, AlertError> {
        // ---
        let hazard_type = draft.hazard_type.trim();
        let region = draft.region.trim();
        let message = draft.message.trim();

        if hazard_type.is_empty() {
            return Err(AlertError::MissingType);
        }
        if region.is_empty() {
            return Err(AlertError::MissingRegion);
        }
        if message.is_empty() {
            return Err(AlertError::MissingMessage);
        }
        let channels = draft.channels.selected();
        if channels.is_empty() {
            return Err(AlertError::NoChannels);
        }

        self.next_seq += 1;
        let alert = Alert {
            id: format!("ALT-{:03}", self.next_seq),
            hazard_type: hazard_type.to_string(),
            region: region.to_string(),
            severity: draft.severity,
            status: AlertStatus::Active,
            issued: Utc::now().naive_utc(),
            recipients: 0,
            channels,
            description: message.to_string(),
        };

        info!(
            "Alert {} ({} {}) for {} broadcast via {}",
            alert.id,
            alert.severity,
            alert.hazard_type,
            alert.region,
            alert.channels.join(", ")
        );

        self.alerts.push(alert.clone());
        Ok(alert)
    }

    pub fn list(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn resolve(&mut self, id: &str) -> Option<Alert> {
        // ---
        let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) else {
            debug!("No alert with id {}, nothing to resolve", id);
            return None;
        };
        alert.status = AlertStatus::Resolved;
        info!("Alert {} resolved", id);
        Some(alert.clone())
    }

    pub fn active_count(&self) -> usize {
        // ---
        self.alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Active)
            .count()
    }
}

fn alert_seq(id: &str) -> Option<u32> {
    id.strip_prefix("ALT-")?.parse().ok()
}
