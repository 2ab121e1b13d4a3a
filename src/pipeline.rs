//! The normalization pipeline.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s applied to every record.
//! Records start as text, change to a token sequence exactly once (at the
//! tokenizer) and never change back. Missing records pass through every
//! stage untouched, and a stage that fails on one record leaves that record
//! as it was, so one bad row never aborts a batch.
//!
//! The stage order is checked when the pipeline is built, not when it runs:
//!
//! - adjacent stages must agree on the shape they exchange,
//! - there is at most one tokenizer,
//! - negation fusion must run before stop-word removal, since stop words
//!   include the cues it fuses.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::char_filter::{LowercaseCharFilter, WhitespaceCharFilter};
//! use tweetnorm::analysis::token_filter::StopFilter;
//! use tweetnorm::analysis::tokenizer::EnglishTokenizer;
//! use tweetnorm::pipeline::{Pipeline, Record, Stage};
//!
//! let pipeline = Pipeline::builder()
//!     .stage(Stage::text(LowercaseCharFilter::new()))
//!     .stage(Stage::text(WhitespaceCharFilter::new()))
//!     .stage(Stage::tokenize(EnglishTokenizer::new()))
//!     .stage(Stage::tokens(StopFilter::from_words(["this"])))
//!     .build()
//!     .unwrap();
//!
//! let output = pipeline.run(vec![Some("Check  this out".to_string()), None]);
//! assert_eq!(output[0], Record::from(vec!["check".to_string(), "out".to_string()]));
//! assert_eq!(output[1], Record::Missing);
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::char_filter::{
    EmojiCharFilter, LowercaseCharFilter, PatternReplaceCharFilter, PunctuationCharFilter,
    WhitespaceCharFilter,
};
use crate::analysis::token_filter::{LemmaFilter, NegationFilter, StopFilter};
use crate::analysis::tokenizer::{EnglishTokenizer, UnicodeWordTokenizer};
use crate::config::{PipelineConfig, Resources, TokenizerKind};
use crate::error::{Result, TweetnormError};

pub mod record;
pub mod runner;
pub mod stage;

pub use record::Record;
pub use runner::RunSummary;
pub use stage::{Shape, Stage};

/// An ordered, validated list of stages.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Start composing a pipeline.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Build the standard pipeline described by `config`:
    ///
    /// ```text
    /// lowercase → url → mention → hashtag → punctuation → emoji → whitespace
    ///   → tokenize → negation → stop words → lemma
    /// ```
    ///
    /// Disabled parts are left out.
    pub fn from_config(config: &PipelineConfig, resources: &Resources) -> Result<Self> {
        config.validate()?;
        let mut builder = Pipeline::builder();

        if config.lowercase {
            builder = builder.stage(Stage::text(LowercaseCharFilter::new()));
        }
        if config.remove_noise {
            builder = builder
                .stage(Stage::text(PatternReplaceCharFilter::urls()))
                .stage(Stage::text(PatternReplaceCharFilter::mentions()))
                .stage(Stage::text(PatternReplaceCharFilter::hashtags()))
                .stage(Stage::text(PunctuationCharFilter::new()))
                .stage(Stage::text(EmojiCharFilter::new()));
        }
        if config.collapse_whitespace {
            builder = builder.stage(Stage::text(WhitespaceCharFilter::new()));
        }

        builder = match config.tokenizer {
            TokenizerKind::English => builder.stage(Stage::tokenize(EnglishTokenizer::new())),
            TokenizerKind::UnicodeWord => {
                builder.stage(Stage::tokenize(UnicodeWordTokenizer::new()))
            }
        };

        if config.negation.enabled {
            let filter = NegationFilter::new(Arc::clone(&resources.model))
                .with_prefix(config.negation.prefix.as_str());
            builder = builder.stage(Stage::tokens(filter));
        }
        if config.stopwords.enabled {
            let filter = StopFilter::with_set(Arc::clone(&resources.stopwords));
            builder = builder.stage(Stage::tokens(filter));
        }
        if config.lemma.enabled {
            let mut filter = LemmaFilter::new(Arc::clone(&resources.model));
            if config.negation.enabled {
                filter = filter.with_marker(config.negation.prefix.as_str());
            }
            builder = builder.stage(Stage::tokens(filter));
        }

        builder.build()
    }

    /// The default English pipeline with built-in resources.
    pub fn english() -> Result<Self> {
        Self::from_config(&PipelineConfig::default(), &Resources::english()?)
    }

    /// Get the stages, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Names of the stages, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }

    /// Shape of a present record after the last stage.
    pub fn output_shape(&self) -> Shape {
        self.stages.last().map_or(Shape::Text, Stage::output)
    }

    /// Thread one record through every stage.
    pub fn process(&self, record: Record) -> Record {
        self.stages
            .iter()
            .fold(record, |record, stage| stage.apply(record))
    }

    /// Process records sequentially, preserving order.
    pub fn run<I, R>(&self, records: I) -> Vec<Record>
    where
        I: IntoIterator<Item = R>,
        R: Into<Record>,
    {
        records
            .into_iter()
            .map(|record| self.process(record.into()))
            .collect()
    }
}

/// Composes stages and validates their order.
#[derive(Clone, Debug, Default)]
pub struct PipelineBuilder {
    stages: Vec<Stage>,
}

impl PipelineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append several stages.
    pub fn stages<I: IntoIterator<Item = Stage>>(mut self, stages: I) -> Self {
        self.stages.extend(stages);
        self
    }

    /// Validate the stage order and build the pipeline.
    pub fn build(self) -> Result<Pipeline> {
        let tokenizers = self
            .stages
            .iter()
            .filter(|stage| matches!(stage, Stage::Tokenize(_)))
            .count();
        if tokenizers > 1 {
            return Err(TweetnormError::config(format!(
                "a pipeline has at most one tokenizer, found {tokenizers}"
            )));
        }

        let mut shape = Shape::Text;
        for (position, stage) in self.stages.iter().enumerate() {
            if stage.input() != shape {
                return Err(TweetnormError::config(format!(
                    "stage {position} ('{}') expects {} but receives {shape}",
                    stage.name(),
                    stage.input()
                )));
            }
            shape = stage.output();
        }

        let last_negation = self.position_of_last("negation");
        let first_stop = self.stages.iter().position(|stage| stage.name() == "stop");
        if let (Some(negation), Some(stop)) = (last_negation, first_stop) {
            if negation > stop {
                return Err(TweetnormError::config(
                    "negation must run before stop-word removal",
                ));
            }
        }

        debug!(
            "Built pipeline: {}",
            self.stages
                .iter()
                .map(Stage::name)
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        Ok(Pipeline {
            stages: self.stages,
        })
    }

    fn position_of_last(&self, name: &str) -> Option<usize> {
        self.stages.iter().rposition(|stage| stage.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Tokens;

    fn tokens(words: &[&str]) -> Record {
        Record::Tokens(words.iter().map(|w| w.to_string()).collect::<Tokens>())
    }

    #[test]
    fn test_from_config_order() {
        let pipeline = Pipeline::english().unwrap();
        assert_eq!(pipeline.stage_names(), vec![
            "lowercase",
            "url",
            "mention",
            "hashtag",
            "punctuation",
            "emoji",
            "whitespace",
            "english",
            "stop",
            "lemma"
        ]);
        assert_eq!(pipeline.output_shape(), Shape::Tokens);
    }

    #[test]
    fn test_from_config_with_negation() {
        let mut config = PipelineConfig::default();
        config.negation.enabled = true;
        config.lemma.enabled = false;
        config.tokenizer = TokenizerKind::UnicodeWord;

        let pipeline = Pipeline::from_config(&config, &Resources::english().unwrap()).unwrap();
        let names = pipeline.stage_names();
        assert_eq!(&names[7..], &["unicode_word", "negation", "stop"]);
    }

    #[test]
    fn test_scenario() {
        let mut config = PipelineConfig::default();
        config.stopwords.enabled = false;
        let resources = Resources::english().unwrap();
        let base = Pipeline::from_config(&config, &resources).unwrap();

        let pipeline = Pipeline::builder()
            .stages(base.stages()[..8].iter().cloned())
            .stage(Stage::tokens(StopFilter::from_words(["this"])))
            .stage(base.stages()[8].clone())
            .build()
            .unwrap();

        let output = pipeline.process(Record::from("Check this out!! http://x.co @john #fun 😀"));
        assert_eq!(output, tokens(&["check", "out"]));
    }

    #[test]
    fn test_missing_passes_through() {
        let pipeline = Pipeline::english().unwrap();
        assert_eq!(pipeline.process(Record::Missing), Record::Missing);
        assert_eq!(pipeline.run(vec![None::<String>, None]), vec![Record::Missing; 2]);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::builder().build().unwrap();
        assert_eq!(pipeline.process(Record::from("As Is")), Record::from("As Is"));
        assert_eq!(pipeline.output_shape(), Shape::Text);
    }

    #[test]
    fn test_rejects_shape_mismatch() {
        let result = Pipeline::builder()
            .stage(Stage::tokens(StopFilter::new()))
            .build();
        assert!(matches!(result, Err(TweetnormError::Config(_))));

        let result = Pipeline::builder()
            .stage(Stage::tokenize(EnglishTokenizer::new()))
            .stage(Stage::text(LowercaseCharFilter::new()))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_second_tokenizer() {
        let result = Pipeline::builder()
            .stage(Stage::tokenize(EnglishTokenizer::new()))
            .stage(Stage::tokenize(UnicodeWordTokenizer::new()))
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("at most one tokenizer"));
    }

    #[test]
    fn test_rejects_negation_after_stop() {
        let result = Pipeline::builder()
            .stage(Stage::tokenize(EnglishTokenizer::new()))
            .stage(Stage::tokens(StopFilter::new()))
            .stage(Stage::tokens(NegationFilter::english().unwrap()))
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("negation must run before"));
    }

    #[test]
    fn test_negation_survives_stop_words() {
        let mut config = PipelineConfig::default();
        config.negation.enabled = true;
        let pipeline = Pipeline::from_config(&config, &Resources::english().unwrap()).unwrap();

        assert_eq!(pipeline.process(Record::from("not good")), tokens(&["NEG_good"]));
        assert_eq!(
            pipeline.process(Record::from("I don't like Mondays")),
            tokens(&["NEG_like", "mondays"])
        );
    }
}
