//! Command implementations for the tweetnorm CLI.

use std::io::{self, BufRead};

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{PipelineConfig, Resources};
use crate::error::Result;
use crate::ingest::CsvRecordReader;
use crate::pipeline::Pipeline;

/// Execute a CLI command.
pub fn execute_command(args: TweetnormArgs) -> Result<()> {
    match &args.command {
        Command::Normalize(normalize_args) => normalize_file(normalize_args, &args),
        Command::Text(text_args) => normalize_text(text_args, &args),
    }
}

/// Load the configuration file, if any, and apply flag overrides.
pub fn build_config(
    cli_args: &TweetnormArgs,
    pipeline_args: &PipelineArgs,
) -> Result<PipelineConfig> {
    let mut config = match &cli_args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    pipeline_args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Load resources and build the pipeline for `config`.
fn build_pipeline(config: &PipelineConfig) -> Result<Pipeline> {
    let resources = Resources::load(config)?;
    let pipeline = Pipeline::from_config(config, &resources)?;
    info!("Pipeline: {}", pipeline.stage_names().join(" -> "));
    Ok(pipeline)
}

/// Normalize the text column of a delimited file.
pub fn run_normalize(args: &NormalizeArgs, cli_args: &TweetnormArgs) -> Result<NormalizeReport> {
    let config = build_config(cli_args, &args.pipeline)?;
    let pipeline = build_pipeline(&config)?;

    let reader = CsvRecordReader::new()
        .with_column(args.column.as_str())
        .with_delimiter(args.delimiter)?
        .with_flexible(args.flexible);
    let batch = reader.read_path(&args.input)?;
    if batch.skipped > 0 {
        warn!(
            "Skipped {} malformed rows in {}",
            batch.skipped,
            args.input.display()
        );
    }

    let (outputs, summary) =
        pipeline.run_with_summary(batch.records.iter().cloned(), config.parallel.threads)?;

    let shown = if args.head == 0 { outputs.len() } else { args.head };
    let rows = batch
        .records
        .into_iter()
        .zip(outputs)
        .take(shown)
        .enumerate()
        .map(|(index, (input, output))| NormalizedRow {
            index,
            input,
            output,
        })
        .collect();

    Ok(NormalizeReport {
        source: args.input.display().to_string(),
        skipped: batch.skipped,
        summary,
        rows,
    })
}

/// Normalize literal texts, or stdin lines when none are given.
pub fn run_text(args: &TextArgs, cli_args: &TweetnormArgs) -> Result<NormalizeReport> {
    let config = build_config(cli_args, &args.pipeline)?;
    let pipeline = build_pipeline(&config)?;

    let (texts, source) = if args.texts.is_empty() {
        let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
        (lines, "stdin")
    } else {
        (args.texts.clone(), "arguments")
    };

    let inputs: Vec<Option<String>> = texts.into_iter().map(Some).collect();
    let (outputs, summary) =
        pipeline.run_with_summary(inputs.iter().cloned(), config.parallel.threads)?;

    let rows = inputs
        .into_iter()
        .zip(outputs)
        .enumerate()
        .map(|(index, (input, output))| NormalizedRow {
            index,
            input,
            output,
        })
        .collect();

    Ok(NormalizeReport {
        source: source.to_string(),
        skipped: 0,
        summary,
        rows,
    })
}

fn normalize_file(args: &NormalizeArgs, cli_args: &TweetnormArgs) -> Result<()> {
    let report = run_normalize(args, cli_args)?;
    output_report(&report, cli_args)
}

fn normalize_text(args: &TextArgs, cli_args: &TweetnormArgs) -> Result<()> {
    let report = run_text(args, cli_args)?;
    output_report(&report, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::pipeline::Record;

    fn tokens(words: &[&str]) -> Record {
        Record::from(words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_run_text() {
        let args =
            TweetnormArgs::try_parse_from(["tweetnorm", "text", "Not good at all!", "--negation"])
                .unwrap();
        let Command::Text(text_args) = &args.command else {
            panic!("Expected Text command");
        };

        let report = run_text(text_args, &args).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].output, tokens(&["NEG_good"]));
        assert_eq!(report.source, "arguments");
    }

    #[test]
    fn test_run_normalize() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,text").unwrap();
        writeln!(file, "1,Check this out!! http://x.co").unwrap();
        writeln!(file, "2,").unwrap();
        writeln!(file, "3,too,many").unwrap();
        writeln!(file, "4,Cats running").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = TweetnormArgs::try_parse_from([
            "tweetnorm", "normalize", &path, "--head", "2", "--threads", "2",
        ])
        .unwrap();
        let Command::Normalize(normalize_args) = &args.command else {
            panic!("Expected Normalize command");
        };

        let report = run_normalize(normalize_args, &args).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.summary.records, 3);
        assert_eq!(report.summary.missing, 1);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].output, tokens(&["check"]));
        assert_eq!(report.rows[1].output, Record::Missing);
    }

    #[test]
    fn test_config_file_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "stopwords": {{ "enabled": false }}, "parallel": {{ "threads": 3 }} }}"#)
            .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = TweetnormArgs::try_parse_from([
            "tweetnorm", "--config", &path, "text", "--threads", "1",
        ])
        .unwrap();
        let Command::Text(text_args) = &args.command else {
            panic!("Expected Text command");
        };

        let config = build_config(&args, &text_args.pipeline).unwrap();
        assert!(!config.stopwords.enabled);
        assert_eq!(config.parallel.threads, 1);
    }

    #[test]
    fn test_missing_column_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,body\n1,hello").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = TweetnormArgs::try_parse_from(["tweetnorm", "normalize", &path]).unwrap();
        let Command::Normalize(normalize_args) = &args.command else {
            panic!("Expected Normalize command");
        };

        assert!(run_normalize(normalize_args, &args).is_err());
    }
}
