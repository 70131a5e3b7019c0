//! SpreadsheetML (XML Spreadsheet 2003) rendering of the report table.
//!
//! One workbook, one worksheet, every cell a string holding the formatted
//! display value.

use super::COLUMNS;
use crate::models::RevenueReport;

/// Render the report as a SpreadsheetML workbook.
pub fn render_sheet(report: &RevenueReport) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\"?>\n");
    out.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
    out.push_str(
        "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\"\n          \
         xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n",
    );
    out.push_str(" <Worksheet ss:Name=\"Revenue Report\">\n  <Table>\n");

    push_row(&mut out, COLUMNS);
    for row in report.rows() {
        let usd = row.usd_display();
        let local = row.local_display();
        let share = row.share_display();
        push_row(
            &mut out,
            [row.company.as_str(), usd.as_str(), local.as_str(), share.as_str()],
        );
    }

    out.push_str("  </Table>\n </Worksheet>\n</Workbook>\n");
    out
}

fn push_row<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    out.push_str("   <Row>\n");
    for cell in cells {
        out.push_str("    <Cell><Data ss:Type=\"String\">");
        out.push_str(&escape_xml(cell));
        out.push_str("</Data></Cell>\n");
    }
    out.push_str("   </Row>\n");
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
