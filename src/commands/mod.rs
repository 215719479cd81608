pub mod analyze;
pub mod demo;
pub mod init;

use anyhow::{Context, Result};

use crate::cli::ReportArgs;
use crate::config::{self, validation::validate_config, TpepConfig};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::output::OutputFormat;
use analyze::AnalyzeConfig;

/// Load the configuration named by `--config`, or discover one, then apply
/// command-line overrides and validate the result.
pub fn resolve_config(args: &ReportArgs) -> Result<TpepConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load_config(),
    };

    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }
    if let Some(tolerance) = args.tolerance {
        config.classification = config.classification.with_tolerance(tolerance);
    }

    validate_config(&config).map_err(|errors| {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::anyhow!("Invalid settings: {}", details.join("; "))
    })?;

    Ok(config)
}

/// Combine the resolved configuration with the report flags.
pub fn build_analyze_config(
    numbers: Vec<i64>,
    args: &ReportArgs,
    config: &TpepConfig,
) -> AnalyzeConfig {
    let format = args
        .format
        .or(config.output.default_format)
        .unwrap_or(OutputFormat::Terminal);
    let formatting = resolve_formatting(args);

    AnalyzeConfig {
        numbers,
        format,
        output: args.output.clone(),
        precision: config.output.precision,
        classification: config.classification,
        formatting,
    }
}

/// Terminal detection only describes stdout, so reports written to a file
/// are plain unless `--color always` asks otherwise.
fn resolve_formatting(args: &ReportArgs) -> FormattingConfig {
    if args.plain {
        return FormattingConfig::plain();
    }
    match (args.color, &args.output) {
        (Some(ColorMode::Always), _) => FormattingConfig::new(ColorMode::Always),
        (Some(ColorMode::Never), _) | (_, Some(_)) => FormattingConfig::plain(),
        (Some(ColorMode::Auto), None) => FormattingConfig::new(ColorMode::Auto),
        (None, None) => FormattingConfig::from_env(),
    }
}
