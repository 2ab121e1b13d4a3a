//! Negation fusion filter.
//!
//! Asks a [`LanguageModel`] which tokens negate another token, then replaces
//! each negation cue by a marker token made of a prefix and its head's
//! surface form (`not good` → `NEG_good`). The head itself is removed, so the
//! polarity survives later stop-word removal (which would drop `not`) and
//! lemmatization (which has nothing to say about `not`).
//!
//! When several cues negate the same head, the first one carries the fused
//! token and the others are dropped. A cue is never a head: if a model chains
//! cues (`not` → `never` → `mind`), only the last link fuses and the earlier
//! cues are dropped. Tokens outside any negation relation pass through
//! unchanged and in order.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::token_filter::{Filter, NegationFilter};
//!
//! let filter = NegationFilter::english().unwrap();
//! let tokens = vec!["not".to_string(), "good".to_string()];
//! assert_eq!(filter.filter(tokens).unwrap(), vec!["NEG_good"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::model::{EnglishModel, LanguageModel};
use crate::analysis::token::Tokens;
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TweetnormError};

/// Default marker prefix.
pub const DEFAULT_NEGATION_PREFIX: &str = "NEG_";

/// A filter that fuses negation cues with the word they negate.
#[derive(Clone)]
pub struct NegationFilter {
    model: Arc<dyn LanguageModel>,
    prefix: String,
}

impl NegationFilter {
    /// Create a negation filter over a shared model.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        NegationFilter {
            model,
            prefix: DEFAULT_NEGATION_PREFIX.to_string(),
        }
    }

    /// Create a negation filter over the built-in English model.
    pub fn english() -> Result<Self> {
        Ok(Self::new(Arc::new(EnglishModel::new()?)))
    }

    /// Use a different marker prefix.
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Get the marker prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl std::fmt::Debug for NegationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NegationFilter")
            .field("model", &self.model.name())
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl Filter for NegationFilter {
    fn filter(&self, tokens: Tokens) -> Result<Tokens> {
        if tokens.is_empty() {
            return Ok(tokens);
        }

        let analyzed = self.model.analyze(&tokens)?;
        if analyzed.len() != tokens.len() {
            return Err(TweetnormError::analysis(format!(
                "model '{}' returned {} annotations for {} tokens",
                self.model.name(),
                analyzed.len(),
                tokens.len()
            )));
        }

        let is_cue =
            |index: usize| analyzed[index].is_negation() && analyzed[index].head != index;

        // head index -> index of the first cue negating it
        let mut carriers: HashMap<usize, usize> = HashMap::new();
        for (index, token) in analyzed.iter().enumerate() {
            if is_cue(index) && token.head < tokens.len() && !is_cue(token.head) {
                carriers.entry(token.head).or_insert(index);
            }
        }

        if carriers.is_empty() {
            return Ok(tokens);
        }

        let mut output = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            if carriers.contains_key(&index) {
                continue;
            }

            let annotation = &analyzed[index];
            if annotation.is_negation() && annotation.head != index {
                if carriers.get(&annotation.head) == Some(&index) {
                    output.push(format!("{}{}", self.prefix, tokens[annotation.head]));
                }
                continue;
            }

            output.push(token.clone());
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "negation"
    }
}
