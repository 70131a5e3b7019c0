//! Error types for the revenue report pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ReadError`] - spreadsheet reading errors
//! - [`ExportError`] - table serialization errors
//! - [`ReportError`] - top-level pipeline errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. All failures propagate
//! straight to the top-level caller; the pipeline never retries.

use thiserror::Error;

// =============================================================================
// Spreadsheet Reading Errors
// =============================================================================

/// Errors while reading a spreadsheet file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid delimited content.
    #[error("Invalid spreadsheet content: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file.
    #[error("Spreadsheet file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No column headers found in spreadsheet")]
    NoHeaders,
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while serializing the report table to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write output.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to move the finished file into place.
    #[error("Failed to finalize output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Report Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by [`crate::transform::build_report`]
/// and the query operations on [`crate::models::RevenueReport`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Spreadsheet reading error.
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    /// Export error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// A required input column is absent.
    #[error("Input is missing required column '{0}'")]
    MissingColumn(String),

    /// The rate table has no row for the local country.
    #[error("No exchange rate found for '{0}'")]
    MissingExchangeRate(String),

    /// The records input has zero data rows.
    #[error("No revenue records in input")]
    EmptyDataset,

    /// A lookup named a company absent from the report.
    #[error("Company not found in report: '{0}'")]
    CompanyNotFound(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for spreadsheet reading.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for pipeline and query operations.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ReadError -> ReportError
        let read_err = ReadError::EmptyFile;
        let report_err: ReportError = read_err.into();
        assert!(report_err.to_string().contains("empty"));

        // io::Error -> ReadError -> ReportError
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let report_err: ReportError = ReadError::from(io_err).into();
        assert!(report_err.to_string().contains("no such file"));
    }

    #[test]
    fn test_lookup_error_format() {
        let err = ReportError::CompanyNotFound("Apple".into());
        assert!(err.to_string().contains("Apple"));

        let err = ReportError::MissingColumn("Revenue".into());
        assert!(err.to_string().contains("Revenue"));

        let err = ReportError::MissingExchangeRate("Czech Republic".into());
        assert!(err.to_string().contains("Czech Republic"));
    }
}
