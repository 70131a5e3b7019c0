//! Revreport CLI - build, query and export the revenue report
//!
//! # Commands
//!
//! ```bash
//! revreport report --out-dir out       # Build and export report.html/.xls/.csv
//! revreport lookup Apple               # Revenue and row-position lookups
//! revreport sort revenue --descending  # Sorted preview (first 5 rows)
//! ```
//!
//! Input locations default to `data.csv` and `exchange.csv` and can be
//! overridden with `--records` / `--rates`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use revreport::{
    build_report, export_report, ExportFormat, ReportConfig, ReportResult, ReportRow,
};

#[derive(Parser)]
#[command(name = "revreport")]
#[command(about = "Build per-company revenue reports from spreadsheet files", long_about = None)]
struct Cli {
    /// Revenue records spreadsheet
    #[arg(long, global = true, default_value = "data.csv")]
    records: PathBuf,

    /// Exchange-rate spreadsheet
    #[arg(long, global = true, default_value = "exchange.csv")]
    rates: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the report and export it as HTML, SpreadsheetML and CSV
    Report {
        /// Directory the export files are written into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Look up one company's revenue and row position
    Lookup {
        /// Company name as it appears in the records
        company: String,
    },

    /// Sort the report and print the first rows
    Sort {
        /// Column to sort by
        #[arg(value_enum)]
        by: SortKey,

        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortKey {
    /// Lexicographic by company name
    Company,
    /// Numeric by USD revenue
    Revenue,
}

fn main() {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("REVREPORT_LOG", "warn,revreport=info"))
        .init();

    let cli = Cli::parse();

    let config = ReportConfig {
        records: cli.records,
        rates: cli.rates,
        out_dir: PathBuf::from("."),
    };

    let result = match cli.command {
        Commands::Report { out_dir } => cmd_report(ReportConfig { out_dir, ..config }),
        Commands::Lookup { company } => cmd_lookup(&config, &company),
        Commands::Sort { by, descending } => cmd_sort(&config, by, descending),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_report(config: ReportConfig) -> ReportResult<()> {
    eprintln!("📄 Building report from: {}", config.records.display());

    let report = build_report(&config)?;
    print_rows(report.rows());

    for format in [ExportFormat::Html, ExportFormat::Sheet, ExportFormat::Csv] {
        let path = config.out_dir.join(format!("report.{}", format.extension()));
        export_report(&report, format, &path)?;
        eprintln!("💾 Saved: {}", path.display());
    }

    Ok(())
}

fn cmd_lookup(config: &ReportConfig, company: &str) -> ReportResult<()> {
    let report = build_report(config)?;

    println!("{}", report.company_revenue(company)?);
    println!("{}", report.company_row_number(company)?);

    Ok(())
}

fn cmd_sort(config: &ReportConfig, by: SortKey, descending: bool) -> ReportResult<()> {
    let mut report = build_report(config)?;

    let preview = match by {
        SortKey::Company => report.sort_by_company(!descending),
        SortKey::Revenue => report.sort_by_revenue(!descending),
    };
    print_rows(preview);

    Ok(())
}

/// Print rows as an aligned text table on stdout.
fn print_rows(rows: &[ReportRow]) {
    let width = rows
        .iter()
        .map(|row| row.company.len())
        .chain(std::iter::once("Company".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<width$}  {:>15}  {:>15}  {:>8}",
        "Company", "Revenue (USD)", "Revenue (Local)", "Share"
    );
    for row in rows {
        println!(
            "{:<width$}  {:>15}  {:>15}  {:>8}",
            row.company,
            row.usd_display(),
            row.local_display(),
            row.share_display()
        );
    }
}
