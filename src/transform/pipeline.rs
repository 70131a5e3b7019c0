//! High-level pipeline: spreadsheet files in, revenue report out.
//!
//! Combines all the steps: reading both inputs, aggregating revenue per
//! company, converting to the local currency, computing shares that sum to
//! exactly 100, and appending the totals row.
//!
//! # Example
//!
//! ```rust,ignore
//! use revreport::{build_report, ReportConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = build_report(&ReportConfig::default())?;
//!     println!("{}", report.company_revenue("Apple")?);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use super::aggregate::mean_by_company;
use super::rounding::{distribute_rounding, round2};
use crate::error::{ReportError, ReportResult};
use crate::models::{
    RateRecord, ReportRow, RevenueRecord, RevenueReport, RATE_COLUMNS, REVENUE_COLUMNS,
    TOTAL_LABEL,
};
use crate::reader::{read_sheet, RawSheet};

/// Country whose annual rate localizes the USD revenue column.
pub const LOCAL_COUNTRY: &str = "Czech Republic";

/// Decimal places used across the report's numeric columns.
const SHARE_PRECISION: u32 = 2;

/// File locations for one report run.
///
/// Paths are explicit; nothing is resolved against the working directory
/// beyond what the caller puts here.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Revenue records spreadsheet.
    pub records: PathBuf,
    /// Exchange-rate spreadsheet.
    pub rates: PathBuf,
    /// Directory export files are written into.
    pub out_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            records: PathBuf::from("data.csv"),
            rates: PathBuf::from("exchange.csv"),
            out_dir: PathBuf::from("."),
        }
    }
}

/// Build the report table from the configured input files.
///
/// Steps:
/// 1. Read the records sheet; both `Company` and `Revenue` columns are
///    required, and at least one data row must be present.
/// 2. Read the rates sheet and look up the [`LOCAL_COUNTRY`] annual rate.
/// 3. Aggregate, localize, compute shares, append the totals row.
pub fn build_report(config: &ReportConfig) -> ReportResult<RevenueReport> {
    let records = read_records(&config.records)?;
    if records.is_empty() {
        return Err(ReportError::EmptyDataset);
    }
    log::info!("read {} revenue records", records.len());

    let rate = read_local_rate(&config.rates)?;
    log::info!("{LOCAL_COUNTRY} annual rate: {rate}");

    Ok(report_from_records(&records, rate))
}

/// Assemble the report table from already-read records and the local rate.
pub fn report_from_records(records: &[RevenueRecord], rate: f64) -> RevenueReport {
    let companies = mean_by_company(records);
    log::info!("aggregated {} companies", companies.len());

    let total_usd: f64 = companies.iter().map(|c| c.mean_revenue).sum();
    let raw_shares: Vec<f64> = companies
        .iter()
        .map(|c| c.mean_revenue / total_usd * 100.0)
        .collect();
    let shares = distribute_rounding(&raw_shares, SHARE_PRECISION, 100.0);

    let mut rows: Vec<ReportRow> = companies
        .iter()
        .zip(shares)
        .map(|(company, share)| ReportRow {
            company: company.company.clone(),
            revenue_usd: company.mean_revenue,
            revenue_local: round2(company.mean_revenue * rate),
            share,
        })
        .collect();

    let total_local: f64 = rows.iter().map(|r| r.revenue_local).sum();
    let total_share: f64 = rows.iter().map(|r| r.share).sum();
    rows.push(ReportRow {
        company: TOTAL_LABEL.to_string(),
        revenue_usd: round2(total_usd),
        revenue_local: round2(total_local),
        share: round2(total_share),
    });

    RevenueReport::new(rows)
}

fn read_records(path: &Path) -> ReportResult<Vec<RevenueRecord>> {
    let sheet = read_sheet(path)?;
    require_columns(&sheet, &REVENUE_COLUMNS)?;
    Ok(sheet.deserialize()?)
}

fn read_local_rate(path: &Path) -> ReportResult<f64> {
    let sheet = read_sheet(path)?;
    require_columns(&sheet, &RATE_COLUMNS)?;
    let rates: Vec<RateRecord> = sheet.deserialize()?;

    rates
        .iter()
        .find(|r| r.country == LOCAL_COUNTRY)
        .map(|r| r.annual_rate)
        .ok_or_else(|| ReportError::MissingExchangeRate(LOCAL_COUNTRY.to_string()))
}

fn require_columns(sheet: &RawSheet, required: &[&str]) -> ReportResult<()> {
    for column in required {
        if !sheet.has_column(column) {
            return Err(ReportError::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(records: &str, rates: &str) -> (TempDir, ReportConfig) {
        let dir = tempfile::tempdir().unwrap();
        let records_path = dir.path().join("data.csv");
        let rates_path = dir.path().join("exchange.csv");
        fs::write(&records_path, records).unwrap();
        fs::write(&rates_path, rates).unwrap();
        let config = ReportConfig {
            records: records_path,
            rates: rates_path,
            out_dir: dir.path().to_path_buf(),
        };
        (dir, config)
    }

    const RATES: &str = "Country,Annual Rate\nCzech Republic,20.0\nPoland,4.0\n";

    #[test]
    fn test_reference_scenario() {
        let (_dir, config) = write_inputs(
            "Company,Revenue\nApple,100\nApple,200\nOrange,300\n",
            RATES,
        );

        let report = build_report(&config).unwrap();
        let rows = report.rows();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].company, "Apple");
        assert_eq!(rows[0].revenue_usd, 150.0);
        assert_eq!(rows[0].revenue_local, 3000.0);
        assert_eq!(rows[0].share, 33.33);

        assert_eq!(rows[1].company, "Orange");
        assert_eq!(rows[1].revenue_usd, 300.0);
        assert_eq!(rows[1].revenue_local, 6000.0);
        assert_eq!(rows[1].share, 66.67);

        assert_eq!(rows[2].company, TOTAL_LABEL);
        assert_eq!(rows[2].revenue_usd, 450.0);
        assert_eq!(rows[2].revenue_local, 9000.0);
        assert_eq!(rows[2].share, 100.0);
    }

    #[test]
    fn test_company_shares_sum_to_exactly_100() {
        let records: Vec<RevenueRecord> = [
            ("Apple", 123.45),
            ("Orange", 67.89),
            ("Pear", 11.11),
            ("Plum", 500.0),
            ("Quince", 3.33),
        ]
        .iter()
        .map(|(company, revenue)| RevenueRecord {
            company: company.to_string(),
            revenue: *revenue,
        })
        .collect();

        let report = report_from_records(&records, 22.5);
        let company_rows = &report.rows()[..report.len() - 1];
        let share_sum: f64 = company_rows.iter().map(|r| r.share).sum();
        assert_eq!(round2(share_sum), 100.0);

        let total = report.rows().last().unwrap();
        assert_eq!(total.company, TOTAL_LABEL);
        assert_eq!(total.share, 100.0);
    }

    #[test]
    fn test_local_column_matches_rate() {
        let records = vec![
            RevenueRecord {
                company: "Apple".into(),
                revenue: 99.99,
            },
            RevenueRecord {
                company: "Orange".into(),
                revenue: 10.01,
            },
        ];
        let rate = 23.17;
        let report = report_from_records(&records, rate);
        for row in &report.rows()[..report.len() - 1] {
            assert_eq!(row.revenue_local, round2(row.revenue_usd * rate));
        }
    }

    #[test]
    fn test_missing_rate_country() {
        let (_dir, config) = write_inputs(
            "Company,Revenue\nApple,100\n",
            "Country,Annual Rate\nPoland,4.0\n",
        );

        assert!(matches!(
            build_report(&config),
            Err(ReportError::MissingExchangeRate(country)) if country == LOCAL_COUNTRY
        ));
    }

    #[test]
    fn test_missing_revenue_column() {
        let (_dir, config) = write_inputs("Company,Turnover\nApple,100\n", RATES);

        assert!(matches!(
            build_report(&config),
            Err(ReportError::MissingColumn(column)) if column == "Revenue"
        ));
    }

    #[test]
    fn test_header_only_records_is_empty_dataset() {
        let (_dir, config) = write_inputs("Company,Revenue\n", RATES);

        assert!(matches!(build_report(&config), Err(ReportError::EmptyDataset)));
    }

    #[test]
    fn test_missing_records_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let rates_path = dir.path().join("exchange.csv");
        fs::write(&rates_path, RATES).unwrap();
        let config = ReportConfig {
            records: dir.path().join("nope.csv"),
            rates: rates_path,
            out_dir: dir.path().to_path_buf(),
        };

        assert!(matches!(build_report(&config), Err(ReportError::Read(_))));
    }

    #[test]
    fn test_semicolon_delimited_input() {
        let (_dir, config) = write_inputs(
            "Company;Revenue\nApple;100\nOrange;300\n",
            "Country;Annual Rate\nCzech Republic;20.0\n",
        );

        let report = build_report(&config).unwrap();
        assert_eq!(report.rows()[0].company, "Apple");
        assert_eq!(report.rows()[0].revenue_usd, 100.0);
    }
}
