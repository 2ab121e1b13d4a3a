//! Stop word sets and the language registry.
//!
//! A [`StopwordSet`] is an immutable set of lowercase word forms. Sets are
//! loaded once, wrapped in an `Arc`, and shared read-only by every stop-word
//! stage. The [`StopwordRegistry`] maps language tags to sets; only English
//! (`en`) ships built in.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::stopwords::{StopwordRegistry, StopwordSet};
//!
//! let registry = StopwordRegistry::new();
//! let english = registry.get("en").unwrap();
//! assert!(english.contains("The"));
//!
//! let custom = StopwordSet::from_words(["Foo", "bar"]);
//! assert!(custom.contains("foo"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;

use crate::error::{Result, TweetnormError};

/// Default English stop words (the NLTK English list).
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Default English stop words as a shared set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<StopwordSet>> =
    LazyLock::new(|| Arc::new(StopwordSet::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())));

/// An immutable set of lowercase stop words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from words; each word is lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        StopwordSet { words }
    }

    /// Parse a word list: one word per line, `#` starts a comment line.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a word list from a file.
    ///
    /// A missing or unreadable file is a resource error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TweetnormError::resource(format!(
                "cannot read stop-word list {}: {e}",
                path.display()
            ))
        })?;
        let set = Self::parse(&content);
        debug!("Loaded {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    /// The built-in English set.
    pub fn english() -> Arc<StopwordSet> {
        Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET)
    }

    /// Return a copy extended with `extra` and without `remove`.
    pub fn adjusted<I, J, S, T>(&self, extra: I, remove: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(StopwordSet::from_words(extra).words);
        for word in remove {
            words.remove(&word.as_ref().trim().to_lowercase());
        }
        StopwordSet { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stop-word sets keyed by language tag.
#[derive(Clone, Debug)]
pub struct StopwordRegistry {
    sets: HashMap<String, Arc<StopwordSet>>,
}

impl StopwordRegistry {
    /// Create a registry holding the built-in sets.
    pub fn new() -> Self {
        let mut sets = HashMap::new();
        sets.insert("en".to_string(), StopwordSet::english());
        StopwordRegistry { sets }
    }

    /// Create a registry with no sets.
    pub fn empty() -> Self {
        StopwordRegistry {
            sets: HashMap::new(),
        }
    }

    /// Register (or replace) the set for `language`.
    pub fn insert<S: Into<String>>(&mut self, language: S, set: StopwordSet) {
        self.sets.insert(language.into().to_lowercase(), Arc::new(set));
    }

    /// Get the set for `language`.
    ///
    /// An unknown language is a resource error.
    pub fn get(&self, language: &str) -> Result<Arc<StopwordSet>> {
        self.sets
            .get(&language.to_lowercase())
            .cloned()
            .ok_or_else(|| {
                TweetnormError::resource(format!(
                    "no stop-word list registered for language '{language}'"
                ))
            })
    }

    /// Registered language tags, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

impl Default for StopwordRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_english_set() {
        let english = StopwordSet::english();
        assert_eq!(english.len(), 179);
        assert!(english.contains("the"));
        assert!(english.contains("NOT"));
        assert!(english.contains("don't"));
        assert!(!english.contains("good"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let set = StopwordSet::parse("# header\nfoo\n\n  Bar  \n#baz\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert!(!set.contains("#baz"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta").unwrap();

        let set = StopwordSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_resource_error() {
        let result = StopwordSet::load("/definitely/not/here.txt");
        assert!(matches!(result, Err(TweetnormError::Resource(_))));
    }

    #[test]
    fn test_adjusted() {
        let set = StopwordSet::from_words(["a", "not"]).adjusted(["rt"], ["NOT"]);
        assert!(set.contains("a"));
        assert!(set.contains("rt"));
        assert!(!set.contains("not"));
    }

    #[test]
    fn test_registry() {
        let mut registry = StopwordRegistry::new();
        assert!(registry.get("EN").is_ok());
        assert!(matches!(registry.get("fr"), Err(TweetnormError::Resource(_))));

        registry.insert("fr", StopwordSet::from_words(["le", "la"]));
        assert_eq!(registry.get("fr").unwrap().len(), 2);
        assert_eq!(registry.languages(), vec!["en", "fr"]);
        assert!(StopwordRegistry::empty().get("en").is_err());
    }
}
