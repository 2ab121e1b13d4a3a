//! Pipeline stages and the shapes they consume and produce.

use std::fmt;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::pipeline::record::Record;

/// The two value shapes a stage can work on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A single string.
    Text,
    /// An ordered token sequence.
    Tokens,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Text => write!(f, "text"),
            Shape::Tokens => write!(f, "tokens"),
        }
    }
}

/// One step of a pipeline.
///
/// Stages are cheap to clone; the underlying filter is shared.
#[derive(Clone)]
pub enum Stage {
    /// Text to text.
    Text(Arc<dyn CharFilter>),
    /// Text to tokens. The only shape change in a pipeline.
    Tokenize(Arc<dyn Tokenizer>),
    /// Tokens to tokens.
    Tokens(Arc<dyn Filter>),
}

impl Stage {
    /// Wrap a char filter.
    pub fn text<F: CharFilter + 'static>(filter: F) -> Self {
        Stage::Text(Arc::new(filter))
    }

    /// Wrap a tokenizer.
    pub fn tokenize<T: Tokenizer + 'static>(tokenizer: T) -> Self {
        Stage::Tokenize(Arc::new(tokenizer))
    }

    /// Wrap a token filter.
    pub fn tokens<F: Filter + 'static>(filter: F) -> Self {
        Stage::Tokens(Arc::new(filter))
    }

    /// Name of the wrapped component.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Text(filter) => filter.name(),
            Stage::Tokenize(tokenizer) => tokenizer.name(),
            Stage::Tokens(filter) => filter.name(),
        }
    }

    /// Shape this stage accepts.
    pub fn input(&self) -> Shape {
        match self {
            Stage::Text(_) | Stage::Tokenize(_) => Shape::Text,
            Stage::Tokens(_) => Shape::Tokens,
        }
    }

    /// Shape this stage produces.
    pub fn output(&self) -> Shape {
        match self {
            Stage::Text(_) => Shape::Text,
            Stage::Tokenize(_) | Stage::Tokens(_) => Shape::Tokens,
        }
    }

    /// Apply the stage, surfacing component errors.
    ///
    /// Missing records and records of the wrong shape come back unchanged.
    pub fn try_apply(&self, record: &Record) -> Result<Record> {
        let output = match (self, record) {
            (Stage::Text(filter), Record::Text(text)) => Record::Text(filter.filter(text)),
            (Stage::Tokenize(tokenizer), Record::Text(text)) => {
                Record::Tokens(tokenizer.tokenize(text)?)
            }
            (Stage::Tokens(filter), Record::Tokens(tokens)) => {
                Record::Tokens(filter.filter(tokens.clone())?)
            }
            _ => record.clone(),
        };
        Ok(output)
    }

    /// Apply the stage. A component error is logged and the record is
    /// returned as it was.
    ///
    /// Records the stage does not accept are moved through without a copy.
    /// A token stage still copies its input, since the filter consumes the
    /// tokens and the original is needed if it fails.
    pub fn apply(&self, record: Record) -> Record {
        if record.shape() != Some(self.input()) {
            return record;
        }
        match self.try_apply(&record) {
            Ok(output) => output,
            Err(e) => {
                warn!("Stage '{}' failed, record left unchanged: {e}", self.name());
                record
            }
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage({}: {} -> {})", self.name(), self.input(), self.output())
    }
}
