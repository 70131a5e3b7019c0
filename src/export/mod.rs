//! Table serialization to HTML, SpreadsheetML and CSV.
//!
//! Rows are emitted exactly as their display projections; no numeric
//! transformation happens here. Every export goes through a temp file in the
//! destination directory that is renamed into place once the write succeeds,
//! so a failed export never leaves a truncated file behind.

mod delimited;
mod html;
mod sheet;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ExportResult;
use crate::models::RevenueReport;

pub use delimited::render_csv;
pub use html::render_html;
pub use sheet::render_sheet;

/// Column headers shared by every export format.
pub const COLUMNS: [&str; 4] = ["Company", "Revenue (USD)", "Revenue (Local)", "Share"];

/// Target format for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Standalone HTML document.
    Html,
    /// SpreadsheetML (XML Spreadsheet 2003) workbook.
    Sheet,
    /// Comma-delimited text.
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Sheet => "xls",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Serialize the report to `path` in the requested format.
pub fn export_report(
    report: &RevenueReport,
    format: ExportFormat,
    path: &Path,
) -> ExportResult<()> {
    let bytes = match format {
        ExportFormat::Html => render_html(report).into_string().into_bytes(),
        ExportFormat::Sheet => render_sheet(report).into_bytes(),
        ExportFormat::Csv => render_csv(report)?,
    };
    write_atomic(path, &bytes)?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Write bytes to a temp file next to `path`, then rename it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path)?;
    Ok(())
}
