//! Aggregation and report assembly.
//!
//! - [`aggregate`] - group revenue records by company and average them
//! - [`rounding`] - 2-decimal rounding and largest-remainder distribution
//! - [`pipeline`] - spreadsheet files in, revenue report out

pub mod aggregate;
pub mod pipeline;
pub mod rounding;

pub use pipeline::{build_report, report_from_records, ReportConfig, LOCAL_COUNTRY};
