use anyhow::Result;
use std::io::Write;

use super::analyze::{build_reports, open_destination, write_reports, AnalyzeConfig};
use crate::analyzer::AnalysisReport;
use crate::io::output::OutputFormat;

pub const BANNER: &str = ">>> INITIALIZING TPEP PROTOCOL...";

/// Report the configured showcase integers.
pub fn run_demo(config: AnalyzeConfig) -> Result<()> {
    log::info!("Running demo for {:?}", config.numbers);
    let reports = build_reports(&config.numbers, &config.classification)?;
    let destination = open_destination(config.output.as_deref())?;
    write_demo(&reports, &config, destination)
}

/// The banner only precedes terminal output so JSON and Markdown stay
/// well-formed.
pub(crate) fn write_demo<W: Write>(
    reports: &[AnalysisReport],
    config: &AnalyzeConfig,
    mut destination: W,
) -> Result<()> {
    if config.format == OutputFormat::Terminal {
        writeln!(destination, "{BANNER}")?;
        writeln!(destination)?;
    }
    write_reports(reports, config, destination)
}
