//! Stop filter implementation.
//!
//! Removes every token whose lowercase form is in a [`StopwordSet`]. Matching
//! is purely lexical: no lemma or stem is computed first, so `running` is kept
//! even if `run` is a stop word.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::token_filter::Filter;
//! use tweetnorm::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(["the", "a"]);
//! let tokens = vec!["The".to_string(), "quick".to_string(), "fox".to_string()];
//!
//! assert_eq!(filter.filter(tokens).unwrap(), vec!["quick", "fox"]);
//! ```

use std::sync::Arc;

use crate::analysis::stopwords::StopwordSet;
use crate::analysis::token::Tokens;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<StopwordSet>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_set(StopwordSet::english())
    }

    /// Create a stop filter sharing an existing set.
    pub fn with_set(stop_words: Arc<StopwordSet>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a stop filter with custom stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_set(Arc::new(StopwordSet::from_words(words)))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop words set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, mut tokens: Tokens) -> Result<Tokens> {
        tokens.retain(|token| !self.is_stop_word(token));
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Tokens {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(["the", "and"]);
        let result = filter.filter(tokens(&["the", "cat", "and", "dog"])).unwrap();

        assert_eq!(result, tokens(&["cat", "dog"]));
    }

    #[test]
    fn test_case_insensitive() {
        let filter = StopFilter::from_words(["this"]);
        let result = filter.filter(tokens(&["THIS", "This", "thistle"])).unwrap();

        assert_eq!(result, tokens(&["thistle"]));
    }

    #[test]
    fn test_empty_input() {
        let filter = StopFilter::new();
        assert!(filter.filter(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_default_english() {
        let filter = StopFilter::default();
        assert!(filter.is_stop_word("not"));
        assert!(!filter.is_stop_word("good"));
        assert_eq!(filter.name(), "stop");

        let result = filter.filter(tokens(&["check", "this", "out"])).unwrap();
        assert_eq!(result, tokens(&["check"]));
    }

    #[test]
    fn test_shared_set() {
        let set = Arc::new(StopwordSet::from_words(["a"]));
        let first = StopFilter::with_set(Arc::clone(&set));
        let second = StopFilter::with_set(set);

        assert_eq!(first.len(), 1);
        assert!(!second.is_empty());
    }
}
