//! Linguistic analysis resources.
//!
//! A [`LanguageModel`] annotates a token sequence with lemmas, part-of-speech
//! tags and head/relation pairs. The lemmatizer and the negation tagger both
//! consult one. Models are built once, before any record is processed, and
//! shared read-only behind an `Arc` by every stage and worker thread.
//!
//! # Available Models
//!
//! - [`english::EnglishModel`] - Lexicon-backed English tagger and lemmatizer

use crate::analysis::token::AnalyzedToken;
use crate::error::Result;

pub mod english;
pub mod lexicon;

pub use english::EnglishModel;
pub use lexicon::Lexicon;

/// Trait for resources that annotate token sequences.
pub trait LanguageModel: Send + Sync {
    /// Annotate `tokens`, returning exactly one entry per input token in the
    /// same order.
    ///
    /// Unknown words must not fail: they come back with their surface form as
    /// lemma.
    fn analyze(&self, tokens: &[String]) -> Result<Vec<AnalyzedToken>>;

    /// Get the name of this model.
    fn name(&self) -> &'static str;
}
