//! CSV export of the report list.

use anyhow::{Context, Result};

use crate::models::{report_time, Report};

// ---

pub const HEADER: [&str; 7] = [
    "ID",
    "Date/Time",
    "Hazard Type",
    "Location",
    "Source",
    "Status",
    "Severity",
];

/// Render reports as CSV, one row per report, in the given order.
pub fn reports_to_csv(reports: &[Report]) -> Result<String> {
    // ---
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for report in reports {
        let date_time = report.date_time.format(report_time::FORMAT).to_string();
        writer
            .write_record([
                report.id.as_str(),
                date_time.as_str(),
                report.hazard_type.as_str(),
                report.location.as_str(),
                report.source.as_str(),
                report.status.as_str(),
                report.severity.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", report.id))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
