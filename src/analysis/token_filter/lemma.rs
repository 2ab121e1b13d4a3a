//! Lemmatization filter.
//!
//! Replaces each token by the lemma a [`LanguageModel`] assigns it in
//! context. Words the model does not know keep their surface form.
//!
//! Tokens carrying a marker prefix (the negation filter's `NEG_`) are
//! lemmatized on the remainder and keep the prefix, so `NEG_liked` becomes
//! `NEG_like`.

use std::sync::Arc;

use crate::analysis::model::{EnglishModel, LanguageModel};
use crate::analysis::token::Tokens;
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TweetnormError};

/// A filter that reduces tokens to their dictionary base form.
#[derive(Clone)]
pub struct LemmaFilter {
    model: Arc<dyn LanguageModel>,
    marker: Option<String>,
}

impl LemmaFilter {
    /// Create a lemma filter over a shared model.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        LemmaFilter {
            model,
            marker: None,
        }
    }

    /// Create a lemma filter over the built-in English model.
    pub fn english() -> Result<Self> {
        Ok(Self::new(Arc::new(EnglishModel::new()?)))
    }

    /// Keep `marker` in front of the lemma of tokens that start with it.
    pub fn with_marker<S: Into<String>>(mut self, marker: S) -> Self {
        let marker = marker.into();
        self.marker = (!marker.is_empty()).then_some(marker);
        self
    }

    fn split_marker<'a>(&self, token: &'a str) -> (Option<&str>, &'a str) {
        match &self.marker {
            Some(marker) => match token.strip_prefix(marker.as_str()) {
                Some(rest) if !rest.is_empty() => (Some(marker.as_str()), rest),
                _ => (None, token),
            },
            None => (None, token),
        }
    }
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("model", &self.model.name())
            .field("marker", &self.marker)
            .finish()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: Tokens) -> Result<Tokens> {
        if tokens.is_empty() {
            return Ok(tokens);
        }

        let mut markers = Vec::with_capacity(tokens.len());
        let mut bare = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let (marker, rest) = self.split_marker(token);
            markers.push(marker.is_some());
            bare.push(rest.to_string());
        }

        let analyzed = self.model.analyze(&bare)?;
        if analyzed.len() != tokens.len() {
            return Err(TweetnormError::analysis(format!(
                "model '{}' returned {} annotations for {} tokens",
                self.model.name(),
                analyzed.len(),
                tokens.len()
            )));
        }

        let marker = self.marker.as_deref().unwrap_or_default();
        Ok(analyzed
            .into_iter()
            .zip(markers)
            .map(|(token, marked)| {
                let lemma = if token.lemma.is_empty() {
                    token.text
                } else {
                    token.lemma
                };
                if marked {
                    format!("{marker}{lemma}")
                } else {
                    lemma
                }
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
