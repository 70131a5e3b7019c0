//! Domain models for the revenue report pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`RevenueRecord`] - one input revenue observation
//! - [`RateRecord`] - one country row from the exchange-rate table
//! - [`ReportRow`] - one derived report row
//! - [`RevenueReport`] - the held report table with query and sort operations
//!
//! Report rows hold raw numeric values; the currency and percent decorations
//! are pure projections applied at display and export time. Sorting and
//! lookups therefore never parse formatted text back into numbers.

use serde::Deserialize;

use crate::error::{ReportError, ReportResult};

/// Company label of the synthetic totals row.
pub const TOTAL_LABEL: &str = "Total";

/// Number of rows returned by the sort operations for inspection.
pub const PREVIEW_ROWS: usize = 5;

// =============================================================================
// Input Records
// =============================================================================

/// One revenue observation from the records spreadsheet.
///
/// Multiple records per company are expected; each contributes to the mean.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenueRecord {
    /// Company name.
    #[serde(rename = "Company")]
    pub company: String,
    /// Observed revenue in USD.
    #[serde(rename = "Revenue")]
    pub revenue: f64,
}

/// Columns the records spreadsheet must carry.
pub const REVENUE_COLUMNS: [&str; 2] = ["Company", "Revenue"];

/// One country row from the exchange-rate spreadsheet.
#[derive(Debug, Clone, Deserialize)]
pub struct RateRecord {
    /// Country name.
    #[serde(rename = "Country")]
    pub country: String,
    /// Annual exchange rate from USD to the country's currency.
    #[serde(rename = "Annual Rate")]
    pub annual_rate: f64,
}

/// Columns the exchange-rate spreadsheet must carry.
pub const RATE_COLUMNS: [&str; 2] = ["Country", "Annual Rate"];

// =============================================================================
// Report Rows
// =============================================================================

/// One row of the derived report table.
///
/// All values are rounded to 2 decimal places. For company rows the share
/// column is largest-remainder rounded so that company shares sum to exactly
/// 100.00; the [`TOTAL_LABEL`] row carries the column sums.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Company name, unique except for the [`TOTAL_LABEL`] sentinel.
    pub company: String,
    /// Mean revenue in USD.
    pub revenue_usd: f64,
    /// Revenue converted to the local currency.
    pub revenue_local: f64,
    /// Percentage of total USD revenue.
    pub share: f64,
}

impl ReportRow {
    /// USD revenue with its currency prefix, e.g. `$150.00`.
    pub fn usd_display(&self) -> String {
        format!("${:.2}", self.revenue_usd)
    }

    /// Local revenue with its currency prefix, e.g. `CZK 3000.00`.
    pub fn local_display(&self) -> String {
        format!("CZK {:.2}", self.revenue_local)
    }

    /// Share with its percent suffix, e.g. `33.33 %`.
    pub fn share_display(&self) -> String {
        format!("{:.2} %", self.share)
    }
}

// =============================================================================
// Revenue Report
// =============================================================================

/// The held report table.
///
/// Constructed once per build, replacing any previous table. Sort operations
/// mutate row order in place; queries and exports read the current order.
#[derive(Debug, Clone, Default)]
pub struct RevenueReport {
    rows: Vec<ReportRow>,
}

impl RevenueReport {
    /// Wrap assembled rows into a report table.
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    /// All rows in current order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows, totals row included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row matching the company name, with its 0-based position.
    fn find(&self, company: &str) -> ReportResult<(usize, &ReportRow)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.company == company)
            .ok_or_else(|| ReportError::CompanyNotFound(company.to_string()))
    }

    /// Sentence describing the company's USD revenue and share.
    pub fn company_revenue(&self, company: &str) -> ReportResult<String> {
        let (_, row) = self.find(company)?;
        Ok(format!(
            "Company {} has revenue {} and share {}",
            company,
            row.usd_display(),
            row.share_display()
        ))
    }

    /// Sentence giving the company's 1-based row position in current order.
    pub fn company_row_number(&self, company: &str) -> ReportResult<String> {
        let (index, _) = self.find(company)?;
        Ok(format!(
            "Company {} is located on a row number {}",
            company,
            index + 1
        ))
    }

    /// Sort rows by company name in place; returns the first rows for
    /// inspection. The totals row is sorted like any other.
    pub fn sort_by_company(&mut self, ascending: bool) -> &[ReportRow] {
        self.rows.sort_by(|a, b| {
            let order = a.company.cmp(&b.company);
            if ascending {
                order
            } else {
                order.reverse()
            }
        });
        self.preview()
    }

    /// Sort rows by USD revenue in place; returns the first rows for
    /// inspection. Sorts on the raw numeric column, never on formatted text.
    pub fn sort_by_revenue(&mut self, ascending: bool) -> &[ReportRow] {
        self.rows.sort_by(|a, b| {
            let order = a.revenue_usd.total_cmp(&b.revenue_usd);
            if ascending {
                order
            } else {
                order.reverse()
            }
        });
        self.preview()
    }

    /// The first [`PREVIEW_ROWS`] rows in current order, fewer if the table
    /// is smaller.
    pub fn preview(&self) -> &[ReportRow] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }
}
