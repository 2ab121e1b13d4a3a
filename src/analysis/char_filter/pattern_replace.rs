//! Regex-based replacement char filter.
//!
//! The social-media noise patterns (URLs, `@mentions`, `#hashtags`) are all
//! instances of this filter with an empty replacement.

use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TweetnormError};

/// Scheme-prefixed or `www.`-prefixed run of non-whitespace.
pub const URL_PATTERN: &str = r"(?i)(?:https?://|www\.)\S+";

/// `@` followed by word characters.
pub const MENTION_PATTERN: &str = r"@\w+";

/// `#` followed by word characters.
pub const HASHTAG_PATTERN: &str = r"#\w+";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TweetnormError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        })
    }

    /// Build one of the built-in removal filters. The patterns are constants,
    /// so compilation cannot fail at runtime.
    fn removal(pattern: &'static str, name: &'static str) -> Self {
        let pattern = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => unreachable!("built-in pattern {name} must compile: {e}"),
        };

        Self {
            pattern,
            replacement: String::new(),
            name,
        }
    }

    /// Filter deleting URLs. Matching is case-insensitive and ignores line
    /// boundaries.
    pub fn urls() -> Self {
        Self::removal(URL_PATTERN, "url")
    }

    /// Filter deleting `@mentions`.
    pub fn mentions() -> Self {
        Self::removal(MENTION_PATTERN, "mention")
    }

    /// Filter deleting `#hashtags`.
    pub fn hashtags() -> Self {
        Self::removal(HASHTAG_PATTERN, "hashtag")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
