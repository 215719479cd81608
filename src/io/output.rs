use crate::analyzer::AnalysisReport;
use crate::formatting::{FormattingConfig, Styler};
use serde::{Deserialize, Serialize};
use std::io::Write;

const RULE: &str = "------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;

    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        reports
            .iter()
            .try_for_each(|report| self.write_report(report))
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    /// Several reports form one JSON array, never a stream of documents.
    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }

    fn write_row(&mut self, metric: &str, value: &str, target: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} | {target} |")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let p = self.precision;

        writeln!(
            self.writer,
            "## TPEP Analysis: {} ({})",
            report.n, report.parity
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value | Target |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        self.write_row("Factors", &report.factors.to_string(), "-")?;
        self.write_row("Totient (phi)", &report.phi.to_string(), "-")?;
        self.write_row("Divisor Sum (sigma)", &report.sigma.to_string(), "-")?;
        self.write_row(
            "Totient Density",
            &format!("{:.p$}", report.totient_density),
            "< 0.5",
        )?;
        self.write_row(
            "Perfection Ratio",
            &format!("{:.p$}", report.perfection_ratio),
            "= 2.0",
        )?;
        self.write_row(
            "TPEP Ratio",
            &format!("{:.p$}", report.tpep_ratio),
            &format!("{:.p$}", report.target_ratio),
        )?;
        self.write_row("Mirror Gap", &format!("{:.p$}", report.mirror_gap), "-")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Status:** {}", report.stability)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "# TPEP Analysis Report")?;
        writeln!(self.writer)?;
        reports
            .iter()
            .try_for_each(|report| self.write_report(report))
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    precision: usize,
    styler: Styler,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, precision: usize) -> Self {
        Self {
            writer,
            precision,
            styler: Styler::new(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let p = self.precision;
        let heading = format!("--- TPEP ANALYSIS: {} ({}) ---", report.n, report.parity);
        let status = if report.stability.is_stable() {
            self.styler.success(report.stability.label())
        } else {
            self.styler.error(report.stability.label())
        };
        let rule = self.styler.dim(RULE);

        writeln!(self.writer, "{}", self.styler.header(&heading))?;
        writeln!(self.writer, "1. Factors:           {}", report.factors)?;
        writeln!(
            self.writer,
            "2. Totient Density:   {:.p$} (Target < 0.5)",
            report.totient_density
        )?;
        writeln!(
            self.writer,
            "3. Perfection Ratio:  {:.p$} (Target = 2.0)",
            report.perfection_ratio
        )?;
        writeln!(self.writer, "{rule}")?;
        writeln!(
            self.writer,
            "4. TPEP RATIO (sigma/phi): {:.p$}",
            report.tpep_ratio
        )?;
        writeln!(
            self.writer,
            "   TARGET:                 {:.p$}",
            report.target_ratio
        )?;
        writeln!(self.writer, "   STATUS:                 {status}")?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "5. Mirror Gap:        {:.p$}", report.mirror_gap)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
    precision: usize,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, precision)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting, precision)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::IntegerAnalyzer;
    use crate::config::ClassificationConfig;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn report(n: i64) -> AnalysisReport {
        IntegerAnalyzer::new(n)
            .unwrap()
            .report(&ClassificationConfig::default())
            .unwrap()
    }

    fn render(format: OutputFormat, reports: &[AnalysisReport]) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, &mut buffer, FormattingConfig::plain(), 5);
            writer.write_reports(reports).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_report_layout() {
        let text = render(OutputFormat::Terminal, &[report(945)]);
        assert_eq!(
            text,
            indoc! {"
                --- TPEP ANALYSIS: 945 (ODD) ---
                1. Factors:           {3: 3, 5: 1, 7: 1}
                2. Totient Density:   0.45714 (Target < 0.5)
                3. Perfection Ratio:  2.03175 (Target = 2.0)
                ------------------------------------------
                4. TPEP RATIO (sigma/phi): 4.44444
                   TARGET:                 4.00000
                   STATUS:                 IMPERFECT (Unstable)
                ------------------------------------------
                5. Mirror Gap:        2.48889

            "}
        );
    }

    #[test]
    fn test_terminal_precision() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain(), 2)
            .write_report(&report(28))
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("2. Totient Density:   0.43 (Target < 0.5)"));
        assert!(text.contains("3. Perfection Ratio:  2.00 (Target = 2.0)"));
        assert!(text.contains("   TARGET:                 4.00"));
    }

    #[test]
    fn test_markdown_report() {
        let text = render(OutputFormat::Markdown, &[report(1)]);
        assert!(text.starts_with("# TPEP Analysis Report\n\n## TPEP Analysis: 1 (ODD)\n"));
        assert!(text.contains("| Factors | {} | - |"));
        assert!(text.contains("| TPEP Ratio | 1.00000 | 4.00000 |"));
        assert!(text.contains("**Status:** IMPERFECT (Unstable)"));
    }

    #[test]
    fn test_json_reports_form_an_array() {
        let text = render(OutputFormat::Json, &[report(28), report(13)]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["n"], 28);
        assert_eq!(items[0]["factors"]["2"], 2);
        assert_eq!(items[0]["factors"]["7"], 1);
        assert_eq!(items[0]["sigma"], 56);
        assert_eq!(items[0]["parity"], "even");
        assert_eq!(items[1]["stability"], "unstable");
        assert_eq!(items[1]["phi"], 12);
    }
}
