//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TweetnormArgs};
use crate::error::Result;
use crate::pipeline::{Record, RunSummary};

/// One input value and what the pipeline made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow {
    /// Position in the input.
    pub index: usize,
    /// Raw text, `None` when missing.
    pub input: Option<String>,
    /// Pipeline output.
    pub output: Record,
}

/// Result of a normalize run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Where the records came from.
    pub source: String,
    /// Rows skipped at ingestion.
    pub skipped: usize,
    /// Run statistics over every record.
    pub summary: RunSummary,
    /// Rows selected for display.
    pub rows: Vec<NormalizedRow>,
}

/// Print a report to stdout in the selected format.
pub fn output_report(report: &NormalizeReport, args: &TweetnormArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, args.output_format, args.verbosity())
}

/// Write a report in `format`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &NormalizeReport,
    format: OutputFormat,
    verbosity: u8,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, report, verbosity),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Jsonl => {
            for row in &report.rows {
                serde_json::to_writer(&mut *out, row)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

fn write_human<W: Write>(out: &mut W, report: &NormalizeReport, verbosity: u8) -> Result<()> {
    let summary = &report.summary;
    if verbosity > 0 {
        writeln!(
            out,
            "Normalized {} records from {} ({} missing, {} skipped, {} tokens) in {} ms",
            summary.records,
            report.source,
            summary.missing,
            report.skipped,
            summary.tokens,
            summary.duration_ms
        )?;
        writeln!(out)?;
    }

    for row in &report.rows {
        writeln!(out, "{:>6}  {}", row.index, row.output)?;
        if verbosity > 1 {
            let input = row.input.as_deref().unwrap_or("<missing>");
            writeln!(out, "{:>6}  {input}", "<-")?;
        }
    }

    if verbosity > 0 && report.rows.len() < summary.records {
        writeln!(out)?;
        writeln!(out, "... {} more rows", summary.records - report.rows.len())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> NormalizeReport {
        NormalizeReport {
            source: "tweets.csv".to_string(),
            skipped: 1,
            summary: RunSummary {
                records: 3,
                missing: 1,
                tokenized: 2,
                tokens: 3,
                duration_ms: 0,
            },
            rows: vec![
                NormalizedRow {
                    index: 0,
                    input: Some("Check this out!!".to_string()),
                    output: Record::from(vec!["check".to_string(), "out".to_string()]),
                },
                NormalizedRow {
                    index: 1,
                    input: None,
                    output: Record::Missing,
                },
            ],
        }
    }

    fn render(format: OutputFormat, verbosity: u8) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &report(), format, verbosity).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_human() {
        let text = render(OutputFormat::Human, 1);
        assert!(text.starts_with("Normalized 3 records from tweets.csv (1 missing, 1 skipped"));
        assert!(text.contains("     0  [check, out]\n"));
        assert!(text.contains("     1  <missing>\n"));
        assert!(text.contains("... 1 more rows"));

        let quiet = render(OutputFormat::Human, 0);
        assert_eq!(quiet, "     0  [check, out]\n     1  <missing>\n");
    }

    #[test]
    fn test_jsonl() {
        let text = render(OutputFormat::Jsonl, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"index":0,"input":"Check this out!!","output":["check","out"]}"#
        );
        assert_eq!(lines[1], r#"{"index":1,"input":null,"output":null}"#);
    }

    #[test]
    fn test_json() {
        let text = render(OutputFormat::Json, 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["summary"]["tokens"], 3);
        assert_eq!(value["rows"][0]["output"][1], "out");
    }
}
