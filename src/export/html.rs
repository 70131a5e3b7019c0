//! HTML rendering of the report table.

use chrono::Local;
use maud::{html, Markup, DOCTYPE};

use super::COLUMNS;
use crate::models::RevenueReport;

/// Render the report as a standalone HTML document.
pub fn render_html(report: &RevenueReport) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Revenue Report" }
                style {
                    "table { border-collapse: collapse; } \
                     th, td { border: 1px solid #999; padding: 4px 10px; text-align: left; } \
                     th { background-color: #f0f0f0; }"
                }
            }
            body {
                h1 { "Revenue Report" }
                table {
                    thead {
                        tr {
                            @for column in &COLUMNS {
                                th { (column) }
                            }
                        }
                    }
                    tbody {
                        @for row in report.rows() {
                            tr {
                                td { (row.company) }
                                td { (row.usd_display()) }
                                td { (row.local_display()) }
                                td { (row.share_display()) }
                            }
                        }
                    }
                }
                p {
                    small { "Generated " (Local::now().format("%Y-%m-%d %H:%M:%S")) }
                }
            }
        }
    }
}
