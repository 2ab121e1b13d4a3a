//! Token filter implementations for token transformation.
//!
//! Filters run after the tokenizer and map one token sequence to another.
//! They may drop tokens (stop words), fuse them (negation) or rewrite them
//! (lemmas), but never reorder what they keep.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words, case-insensitively
//! - [`negation::NegationFilter`] - Fuses negation cues into their head word
//! - [`lemma::LemmaFilter`] - Replaces tokens by their dictionary base form
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::from_words(["this"]);
//! let tokens = vec!["check".to_string(), "this".to_string(), "out".to_string()];
//! assert_eq!(filter.filter(tokens).unwrap(), vec!["check", "out"]);
//! ```
//!
//! # Filter Chaining
//!
//! Negation has to see the cue words before stop-word removal deletes them:
//!
//! ```text
//! Tokenizer → Negation → Stop Words → Lemma
//! ```

use crate::analysis::token::Tokens;
use crate::error::Result;

/// Trait for filters that transform token sequences.
///
/// The trait requires `Send + Sync` so a filter can be shared by the
/// parallel runner.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use tweetnorm::analysis::token::Tokens;
/// use tweetnorm::analysis::token_filter::Filter;
/// use tweetnorm::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: Tokens) -> Result<Tokens> {
///         Ok(tokens.into_iter().map(|t| t.chars().rev().collect()).collect())
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
///
/// let out = ReverseFilter.filter(vec!["abc".to_string()]).unwrap();
/// assert_eq!(out, vec!["cba"]);
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token sequence.
    fn filter(&self, tokens: Tokens) -> Result<Tokens>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lemma;
pub mod negation;
pub mod stop;

pub use lemma::LemmaFilter;
pub use negation::NegationFilter;
pub use stop::StopFilter;
