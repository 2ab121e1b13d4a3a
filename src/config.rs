//! Pipeline configuration and resource loading.
//!
//! A [`PipelineConfig`] describes which stages a pipeline has and where its
//! linguistic resources come from. It is plain data: serde-serializable, every
//! field defaulted, and loadable from a JSON file. [`Resources`] turns a
//! configuration into the loaded, shared, read-only resources the stages use.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::config::PipelineConfig;
//!
//! let config = PipelineConfig::from_json(r#"{ "negation": { "enabled": true } }"#).unwrap();
//! assert!(config.negation.enabled);
//! assert!(config.lemma.enabled);
//! assert_eq!(config.stopwords.language, "en");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::model::{EnglishModel, LanguageModel};
use crate::analysis::stopwords::{StopwordRegistry, StopwordSet};
use crate::analysis::token_filter::negation::DEFAULT_NEGATION_PREFIX;
use crate::error::{Result, TweetnormError};

/// Which tokenizer the pipeline uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Whitespace chunks with English clitic splitting.
    #[default]
    English,
    /// Unicode word boundaries, words only.
    UnicodeWord,
}

/// Stop-word removal settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Whether the stop-word stage runs.
    pub enabled: bool,
    /// Language tag looked up in the stop-word registry.
    pub language: String,
    /// Word list replacing the registry entry for `language`.
    pub file: Option<PathBuf>,
    /// Words added to the set.
    pub extra: Vec<String>,
    /// Words removed from the set.
    pub keep: Vec<String>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "en".to_string(),
            file: None,
            extra: Vec::new(),
            keep: Vec::new(),
        }
    }
}

/// Lemmatization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemmaConfig {
    /// Whether the lemma stage runs.
    pub enabled: bool,
    /// Lexicon file replacing the built-in English lexicon.
    pub lexicon: Option<PathBuf>,
}

impl Default for LemmaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lexicon: None,
        }
    }
}

/// Negation fusion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegationConfig {
    /// Whether the negation stage runs.
    pub enabled: bool,
    /// Prefix of fused tokens.
    pub prefix: String,
}

impl Default for NegationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: DEFAULT_NEGATION_PREFIX.to_string(),
        }
    }
}

/// Parallel execution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Worker threads. 1 runs on the calling thread.
    pub threads: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
        }
    }
}

/// Configuration for a normalization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Lowercase text before anything else.
    pub lowercase: bool,
    /// Remove URLs, mentions, hashtags, punctuation and emoji.
    pub remove_noise: bool,
    /// Collapse whitespace runs left behind by noise removal.
    pub collapse_whitespace: bool,
    /// Tokenizer to use.
    pub tokenizer: TokenizerKind,
    /// Negation fusion.
    pub negation: NegationConfig,
    /// Stop-word removal.
    pub stopwords: StopwordConfig,
    /// Lemmatization.
    pub lemma: LemmaConfig,
    /// Parallel execution.
    pub parallel: ParallelConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_noise: true,
            collapse_whitespace: true,
            tokenizer: TokenizerKind::default(),
            negation: NegationConfig::default(),
            stopwords: StopwordConfig::default(),
            lemma: LemmaConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TweetnormError::config(format!("cannot read config {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&content)?;
        debug!("Loaded pipeline configuration from {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.parallel.threads == 0 {
            return Err(TweetnormError::config("parallel.threads must be at least 1"));
        }
        if self.negation.prefix.is_empty() {
            return Err(TweetnormError::config("negation.prefix must not be empty"));
        }
        if self.stopwords.language.trim().is_empty() {
            return Err(TweetnormError::config("stopwords.language must not be empty"));
        }
        Ok(())
    }

    /// Whether any stage needs a language model.
    pub fn needs_model(&self) -> bool {
        self.negation.enabled || self.lemma.enabled
    }
}

/// Loaded resources shared by every stage and worker.
#[derive(Clone)]
pub struct Resources {
    /// Stop words for the configured language.
    pub stopwords: Arc<StopwordSet>,
    /// Tagger, lemmatizer and negation parser.
    pub model: Arc<dyn LanguageModel>,
}

impl Resources {
    /// Create resources from already loaded parts.
    pub fn new(stopwords: Arc<StopwordSet>, model: Arc<dyn LanguageModel>) -> Self {
        Resources { stopwords, model }
    }

    /// Built-in English stop words and model.
    pub fn english() -> Result<Self> {
        Ok(Self::new(StopwordSet::english(), Arc::new(EnglishModel::new()?)))
    }

    /// Load everything `config` refers to.
    ///
    /// Any missing file, unknown language or malformed lexicon fails here,
    /// before a single record is processed.
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let mut registry = StopwordRegistry::new();
        let language = config.stopwords.language.as_str();
        if let Some(file) = &config.stopwords.file {
            registry.insert(language, StopwordSet::load(file)?);
        }

        let base = registry.get(language)?;
        let stopwords = if config.stopwords.extra.is_empty() && config.stopwords.keep.is_empty() {
            base
        } else {
            Arc::new(base.adjusted(&config.stopwords.extra, &config.stopwords.keep))
        };

        let model = match &config.lemma.lexicon {
            Some(path) => EnglishModel::from_file(path)?,
            None => EnglishModel::new()?,
        };

        debug!(
            "Loaded resources: {} stop words ({}), model '{}'",
            stopwords.len(),
            language,
            model.name()
        );

        Ok(Self::new(stopwords, Arc::new(model)))
    }
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resources")
            .field("stopwords", &self.stopwords.len())
            .field("model", &self.model.name())
            .finish()
    }
}
