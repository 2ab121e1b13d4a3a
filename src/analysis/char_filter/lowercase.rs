//! Lowercase char filter.

use super::CharFilter;

/// Converts the whole text to lowercase before any other normalization.
///
/// Uses the fast ASCII path when possible and falls back to Unicode-aware
/// lowercasing otherwise.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Hello WORLD"), "hello world");
        assert_eq!(filter.filter("ÉCOLE Straße"), "école straße");
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}
