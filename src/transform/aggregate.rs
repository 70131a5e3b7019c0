//! Group revenue records by company and average them.
//!
//! ```text
//! Records (one per observation)   →   Aggregates (one per company)
//! ┌──────────────────────────┐        ┌───────────────────────┐
//! │ Apple,  100              │        │ Apple   mean = 150.00 │
//! │ Apple,  200              │   →    ├───────────────────────┤
//! │ Orange, 300              │        │ Orange  mean = 300.00 │
//! └──────────────────────────┘        └───────────────────────┘
//! ```

use std::collections::BTreeMap;

use super::rounding::round2;
use crate::models::RevenueRecord;

/// Mean revenue for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRevenue {
    /// Company name.
    pub company: String,
    /// Arithmetic mean of the company's revenue records, rounded to 2
    /// decimal places.
    pub mean_revenue: f64,
}

/// Mean revenue per company, ascending by company name.
///
/// Duplicate records simply contribute to the mean; there is no
/// deduplication. The output order is deterministic for identical input.
pub fn mean_by_company(records: &[RevenueRecord]) -> Vec<CompanyRevenue> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for record in records {
        let entry = groups.entry(record.company.as_str()).or_insert((0.0, 0));
        entry.0 += record.revenue;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(company, (sum, count))| CompanyRevenue {
            company: company.to_string(),
            mean_revenue: round2(sum / count as f64),
        })
        .collect()
}
