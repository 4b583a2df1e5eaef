//! Emission Report - Supply Chain Emission Factors Analysis
//!
//! One-shot pipeline: load the dataset, build the five report views, and
//! stream the report (text + chart specs) to stdout as JSON lines.

use anyhow::Result;
use emission_report::data::{loader, transform};
use emission_report::report::{build_report, JsonLinesRenderer};
use emission_report::DATA_PATH;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Scoped read: the file is fully loaded and closed before any view runs
    let records = loader::load_records(DATA_PATH)?;
    info!(rows = records.height(), path = DATA_PATH, "Dataset loaded");

    let sectored = transform::with_sector(&records)?;

    let report = build_report(&records, &sectored)?;
    info!(figures = report.figure_count(), "Report built");

    let stdout = std::io::stdout();
    let mut renderer = JsonLinesRenderer::new(stdout.lock());
    report.present(&mut renderer)?;

    Ok(())
}
