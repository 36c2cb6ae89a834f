//! The report store: canonical, in-memory collection of incident reports.
//!
//! The store is a plain owned value. It never fails: unknown ids are
//! ignored by `verify`/`flag` and reported back to the caller as `false`.
//! Sharing across request handlers is done by the caller (see `routes`),
//! which puts one instance behind a lock and injects it as router state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{NewReport, Report, ReportStatus, Severity};

// ---

/// Criteria used by the reports page. Every present field must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    pub status: Option<ReportStatus>,
    /// Case-insensitive substring of location, hazard type, or id.
    pub search: Option<String>,
    pub hazard_type: Option<String>,
    pub severity: Option<Severity>,
}

impl ReportQuery {
    fn matches(&self, report: &Report) -> bool {
        // ---
        let status_ok = self.status.map_or(true, |s| report.status == s);

        let search_ok = self
            .search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map_or(true, |term| {
                let term = term.to_lowercase();
                report.location.to_lowercase().contains(&term)
                    || report.hazard_type.to_lowercase().contains(&term)
                    || report.id.to_lowercase().contains(&term)
            });

        let hazard_ok = self
            .hazard_type
            .as_ref()
            .map_or(true, |h| &report.hazard_type == h);

        let severity_ok = self.severity.map_or(true, |s| report.severity == s);

        status_ok && search_ok && hazard_ok && severity_ok
    }
}

/// Per-status counts shown on the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub unverified: usize,
    pub verified: usize,
    pub flagged: usize,
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
    index: HashMap<String, usize>,
    next_seq: u32,
}

impl ReportStore {
    // ---
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given submissions, in order.
    pub fn with_reports(reports: impl IntoIterator<Item = NewReport>) -> Self {
        // ---
        let mut store = Self::new();
        for report in reports {
            store.submit(report);
        }
        store
    }

    /// All reports in insertion order.
    pub fn list_all(&self) -> &[Report] {
        &self.reports
    }

    pub fn list_by_status(&self, status: ReportStatus) -> Vec<Report> {
        // ---
        self.reports
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.index.get(id).map(|&i| &self.reports[i])
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Add a new report under a fresh `RPT-NNN` id. It always starts `Unverified`.
    pub fn submit(&mut self, new: NewReport) -> Report {
        // ---
        let id = self.next_id();
        let report = new.into_report(id.clone());

        self.index.insert(id.clone(), self.reports.len());
        self.reports.push(report.clone());

        info!(
            "Report {} submitted ({} at {})",
            id, report.hazard_type, report.location
        );
        report
    }

    /// Mark a report `Verified`, whatever its current status.
    pub fn verify(&mut self, id: &str) -> bool {
        self.set_status(id, ReportStatus::Verified)
    }

    /// Mark a report `Flagged`, whatever its current status.
    pub fn flag(&mut self, id: &str) -> bool {
        self.set_status(id, ReportStatus::Flagged)
    }

    pub fn search(&self, query: &ReportQuery) -> Vec<Report> {
        // ---
        self.reports
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> StatusSummary {
        // ---
        let mut summary = StatusSummary {
            total: self.reports.len(),
            ..StatusSummary::default()
        };
        for report in &self.reports {
            match report.status {
                ReportStatus::Unverified => summary.unverified += 1,
                ReportStatus::Verified => summary.verified += 1,
                ReportStatus::Flagged => summary.flagged += 1,
            }
        }
        summary
    }

    // ---

    /// Last write wins; there is no transition table.
    fn set_status(&mut self, id: &str, status: ReportStatus) -> bool {
        // ---
        let Some(&i) = self.index.get(id) else {
            debug!("No report with id {}, ignoring {} request", id, status);
            return false;
        };

        let report = &mut self.reports[i];
        let previous = report.status;
        report.status = status;

        info!("Report {} status {} -> {}", id, previous, status);
        true
    }

    fn next_id(&mut self) -> String {
        self.next_seq += 1;
        format!("RPT-{:03}", self.next_seq)
    }
}
