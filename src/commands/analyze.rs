use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analyzer::{AnalysisReport, IntegerAnalyzer};
use crate::config::ClassificationConfig;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};

/// Everything needed to analyze and report a list of integers.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub numbers: Vec<i64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub precision: usize,
    pub classification: ClassificationConfig,
    pub formatting: FormattingConfig,
}

/// Analyze every integer before writing anything, so an invalid input
/// produces no partial report.
pub fn build_reports(
    numbers: &[i64],
    classification: &ClassificationConfig,
) -> Result<Vec<AnalysisReport>> {
    numbers
        .iter()
        .map(|&n| -> Result<AnalysisReport> {
            let analyzer =
                IntegerAnalyzer::new(n).with_context(|| format!("Cannot analyze {n}"))?;
            let report = analyzer.report(classification)?;
            log::info!(
                "{n}: tpep_ratio={:.5} stability={:?}",
                report.tpep_ratio,
                report.stability
            );
            Ok(report)
        })
        .collect()
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let reports = build_reports(&config.numbers, &config.classification)?;
    let destination = open_destination(config.output.as_deref())?;
    write_reports(&reports, &config, destination)
}

/// The `--output` file, or stdout when none is given.
pub(crate) fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    })
}

pub(crate) fn write_reports<W: Write>(
    reports: &[AnalysisReport],
    config: &AnalyzeConfig,
    mut destination: W,
) -> Result<()> {
    {
        let mut writer = create_writer(
            config.format,
            &mut destination,
            config.formatting,
            config.precision,
        );
        writer.write_reports(reports)?;
    }
    destination.flush()?;
    Ok(())
}
