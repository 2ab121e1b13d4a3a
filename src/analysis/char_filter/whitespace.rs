//! Whitespace normalization char filter.

use super::CharFilter;

/// Collapses every run of whitespace to a single space and trims both ends.
///
/// Noise removal leaves gaps where URLs and mentions used to be; this filter
/// closes them so the text form of a record is stable.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCharFilter;

impl WhitespaceCharFilter {
    /// Create a new whitespace filter.
    pub fn new() -> Self {
        WhitespaceCharFilter
    }
}

impl CharFilter for WhitespaceCharFilter {
    fn filter(&self, input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
