//! Tokenizer implementations for text analysis.
//!
//! A tokenizer is the single point where a record changes shape from text to a
//! token sequence. Every stage after it works on [`Tokens`].
//!
//! # Available Tokenizers
//!
//! - [`english::EnglishTokenizer`] - Whitespace chunks with clitic splitting (default)
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries, words only
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::tokenizer::{EnglishTokenizer, Tokenizer};
//!
//! let tokenizer = EnglishTokenizer::new();
//! let tokens = tokenizer.tokenize("I can't wait!").unwrap();
//! assert_eq!(tokens, vec!["I", "ca", "n't", "wait", "!"]);
//! ```

use crate::analysis::token::Tokens;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by the
/// parallel runner.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered token sequence.
    fn tokenize(&self, text: &str) -> Result<Tokens>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod english;
pub mod unicode_word;

pub use english::EnglishTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
