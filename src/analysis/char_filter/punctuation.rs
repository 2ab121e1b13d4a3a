//! Punctuation removal char filter.

use super::CharFilter;

/// Deletes every character of the ASCII punctuation set
/// (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``).
///
/// Characters are deleted, not replaced by whitespace, so neighbouring words
/// can merge: `don't` becomes `dont` and `state-of-the-art` becomes
/// `stateoftheart`. Non-ASCII punctuation (curly quotes, ellipsis) is kept.
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationCharFilter
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
