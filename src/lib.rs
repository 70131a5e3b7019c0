//! # Revreport - per-company revenue report builder
//!
//! Revreport aggregates a spreadsheet of per-transaction revenue records into
//! a per-company report with a localized currency column and a percentage
//! share column that sums to exactly 100, then exports the table as HTML,
//! SpreadsheetML or CSV.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ Spreadsheets │────▶│   Reader    │────▶│  Transform   │────▶│   Report    │
//! │ (records +   │     │ (auto-enc,  │     │ (group, mean,│     │ (query/sort │
//! │  rates)      │     │  auto-delim)│     │  shares)     │     │  /export)   │
//! └──────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use revreport::{build_report, ReportConfig};
//!
//! fn main() {
//!     let report = build_report(&ReportConfig::default()).unwrap();
//!     println!("{}", report.company_revenue("Apple").unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (RevenueRecord, ReportRow, RevenueReport)
//! - [`reader`] - Spreadsheet reading with auto-detection
//! - [`transform`] - Aggregation, share rounding and the pipeline
//! - [`export`] - HTML / SpreadsheetML / CSV serialization

// Core modules
pub mod error;
pub mod models;

// Reading
pub mod reader;

// Transformation
pub mod transform;

// Export
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ExportError, ExportResult, ReadError, ReadResult, ReportError, ReportResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    RateRecord, ReportRow, RevenueRecord, RevenueReport, PREVIEW_ROWS, TOTAL_LABEL,
};

// =============================================================================
// Re-exports - Reader
// =============================================================================

pub use reader::{detect_delimiter, detect_encoding, read_bytes, read_sheet, RawSheet};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::aggregate::{mean_by_company, CompanyRevenue};
pub use transform::rounding::{distribute_rounding, round2};
pub use transform::{build_report, report_from_records, ReportConfig, LOCAL_COUNTRY};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{export_report, render_csv, render_html, render_sheet, ExportFormat, COLUMNS};
