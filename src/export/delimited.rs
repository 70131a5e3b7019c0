//! CSV rendering of the report table.

use super::COLUMNS;
use crate::error::{ExportError, ExportResult};
use crate::models::RevenueReport;

/// Render the report as comma-delimited text.
pub fn render_csv(report: &RevenueReport) -> ExportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;

    for row in report.rows() {
        let usd = row.usd_display();
        let local = row.local_display();
        let share = row.share_display();
        writer.write_record([row.company.as_str(), usd.as_str(), local.as_str(), share.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}
