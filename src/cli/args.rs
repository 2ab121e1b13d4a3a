//! Command line argument parsing for the tweetnorm CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{PipelineConfig, TokenizerKind};

/// tweetnorm - normalize social-media text for sentiment analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetnorm")]
#[command(about = "Normalize social-media posts into clean, lemmatized tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TweetnormArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pipeline configuration file (JSON); flags override its values
    #[arg(long, value_name = "CONFIG_FILE", env = "TWEETNORM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TweetnormArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize the text column of a delimited file
    Normalize(NormalizeArgs),

    /// Normalize literal strings (or stdin lines when none are given)
    Text(TextArgs),
}

/// Arguments for normalizing a file
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Delimited input file with a header row
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Name of the text column
    #[arg(short, long, default_value = "text")]
    pub column: String,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Number of rows to print (0 prints all)
    #[arg(long, default_value = "10")]
    pub head: usize,

    /// Keep rows that have more fields than the header
    #[arg(long)]
    pub flexible: bool,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Arguments for normalizing literal text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Texts to normalize
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Pipeline options shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Worker threads (default: number of CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Fuse negation cues into the word they negate (e.g. NEG_good)
    #[arg(long)]
    pub negation: bool,

    /// Skip lemmatization
    #[arg(long)]
    pub no_lemmatize: bool,

    /// Skip stop-word removal
    #[arg(long)]
    pub no_stopwords: bool,

    /// Stop-word list file (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Stop-word language tag
    #[arg(long)]
    pub language: Option<String>,

    /// Words to keep even if they are stop words (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub keep: Vec<String>,

    /// Lexicon file replacing the built-in English lexicon
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Tokenizer to use
    #[arg(long)]
    pub tokenizer: Option<TokenizerArg>,
}

impl PipelineArgs {
    /// Override `config` with the flags that were given.
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(threads) = self.threads {
            config.parallel.threads = threads;
        }
        if self.negation {
            config.negation.enabled = true;
        }
        if self.no_lemmatize {
            config.lemma.enabled = false;
        }
        if self.no_stopwords {
            config.stopwords.enabled = false;
        }
        if let Some(file) = &self.stopwords {
            config.stopwords.file = Some(file.clone());
        }
        if let Some(language) = &self.language {
            config.stopwords.language = language.clone();
        }
        if !self.keep.is_empty() {
            config.stopwords.keep.extend(self.keep.iter().cloned());
        }
        if let Some(lexicon) = &self.lexicon {
            config.lemma.lexicon = Some(lexicon.clone());
        }
        if let Some(tokenizer) = self.tokenizer {
            config.tokenizer = tokenizer.into();
        }
    }
}

/// Tokenizers selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerArg {
    /// English tokenizer with clitic splitting
    English,
    /// Unicode word boundaries
    UnicodeWord,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(value: TokenizerArg) -> Self {
        match value {
            TokenizerArg::English => TokenizerKind::English,
            TokenizerArg::UnicodeWord => TokenizerKind::UnicodeWord,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// One JSON document
    Json,
    /// One JSON object per row
    Jsonl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_command() {
        let args = TweetnormArgs::try_parse_from([
            "tweetnorm",
            "normalize",
            "tweets.csv",
            "--column",
            "tweet",
            "--head",
            "0",
            "--threads",
            "4",
            "--negation",
        ])
        .unwrap();

        if let Command::Normalize(normalize_args) = args.command {
            assert_eq!(normalize_args.input, PathBuf::from("tweets.csv"));
            assert_eq!(normalize_args.column, "tweet");
            assert_eq!(normalize_args.delimiter, ',');
            assert_eq!(normalize_args.head, 0);
            assert_eq!(normalize_args.pipeline.threads, Some(4));
            assert!(normalize_args.pipeline.negation);
        } else {
            panic!("Expected Normalize command");
        }
    }

    #[test]
    fn test_text_command() {
        let args = TweetnormArgs::try_parse_from([
            "tweetnorm",
            "text",
            "not good",
            "so fun",
            "--no-lemmatize",
        ])
        .unwrap();

        if let Command::Text(text_args) = args.command {
            assert_eq!(text_args.texts, vec!["not good", "so fun"]);
            assert!(text_args.pipeline.no_lemmatize);
        } else {
            panic!("Expected Text command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TweetnormArgs::try_parse_from(["tweetnorm", "text"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TweetnormArgs::try_parse_from(["tweetnorm", "-vv", "text"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = TweetnormArgs::try_parse_from(["tweetnorm", "text", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = TweetnormArgs::try_parse_from(["tweetnorm", "-q", "-v", "text"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TweetnormArgs::try_parse_from(["tweetnorm", "--format", "jsonl", "text"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Jsonl);
        assert!(TweetnormArgs::try_parse_from(["tweetnorm", "--format", "yaml", "text"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let args = TweetnormArgs::try_parse_from([
            "tweetnorm",
            "text",
            "--no-stopwords",
            "--keep",
            "not,no",
            "--tokenizer",
            "unicode-word",
            "--language",
            "EN",
        ])
        .unwrap();

        let Command::Text(text_args) = args.command else {
            panic!("Expected Text command");
        };

        let mut config = PipelineConfig::default();
        text_args.pipeline.apply(&mut config);
        assert!(!config.stopwords.enabled);
        assert_eq!(config.stopwords.keep, vec!["not", "no"]);
        assert_eq!(config.tokenizer, TokenizerKind::UnicodeWord);
        assert_eq!(config.stopwords.language, "EN");
        assert!(config.lemma.enabled);
    }
}
