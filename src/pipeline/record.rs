//! The value a pipeline carries for one input row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Tokens;
use crate::pipeline::stage::Shape;

/// One record moving through the pipeline.
///
/// Serialized as JSON `null`, a string, or an array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// Absent or non-text input. Every stage passes it through.
    #[default]
    Missing,
    /// Text before tokenization.
    Text(String),
    /// Tokens after tokenization.
    Tokens(Tokens),
}

impl Record {
    /// Shape of the value, or `None` for a missing record.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Record::Missing => None,
            Record::Text(_) => Some(Shape::Text),
            Record::Tokens(_) => Some(Shape::Tokens),
        }
    }

    /// Whether this record carries no text.
    pub fn is_missing(&self) -> bool {
        matches!(self, Record::Missing)
    }

    /// Get the text, if the record has not been tokenized.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Record::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the tokens, if the record has been tokenized.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Record::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Number of tokens (0 unless tokenized).
    pub fn token_count(&self) -> usize {
        self.as_tokens().map_or(0, <[String]>::len)
    }

    /// Flatten back into the raw input form; tokens are joined by single spaces.
    pub fn into_text(self) -> Option<String> {
        match self {
            Record::Missing => None,
            Record::Text(text) => Some(text),
            Record::Tokens(tokens) => Some(tokens.join(" ")),
        }
    }
}

impl From<Option<String>> for Record {
    fn from(value: Option<String>) -> Self {
        value.map_or(Record::Missing, Record::Text)
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Record::Text(value)
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Record::Text(value.to_string())
    }
}

impl From<Tokens> for Record {
    fn from(value: Tokens) -> Self {
        Record::Tokens(value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Missing => write!(f, "<missing>"),
            Record::Text(text) => write!(f, "{text}"),
            Record::Tokens(tokens) => write!(f, "[{}]", tokens.join(", ")),
        }
    }
}
