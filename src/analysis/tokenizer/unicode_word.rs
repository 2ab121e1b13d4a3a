//! Unicode word tokenizer implementation.
//!
//! Splits text using the Unicode word boundary rules (UAX #29) and keeps only
//! segments that contain an alphanumeric character. Contractions stay whole
//! (`don't`), and punctuation and whitespace are dropped.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello, world! don't stop").unwrap();
//! assert_eq!(tokens, vec!["Hello", "world", "don't", "stop"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Tokens;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Tokens> {
        let tokens = text
            .split_word_bounds()
            // Only keep actual words (not whitespace or punctuation)
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(str::to_string)
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("hello, world!").unwrap();
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_numbers_and_accents() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("café 42 résumé").unwrap();
        assert_eq!(tokens, vec!["café", "42", "résumé"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
