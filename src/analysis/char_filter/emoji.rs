//! Emoji removal char filter.

use super::CharFilter;

/// Deletes code points outside the Basic Multilingual Plane (above U+FFFF).
///
/// Most pictographic emoji live in the supplementary planes and are removed.
/// Symbols that live inside the BMP are kept, for example U+2764 (heavy black
/// heart), U+263A (smiling face) and U+2600 (sun), as is the U+FE0F variation
/// selector. Supplementary-plane letters (historic scripts, rare CJK
/// ideographs) are removed as well.
#[derive(Clone, Debug, Default)]
pub struct EmojiCharFilter;

impl EmojiCharFilter {
    /// Create a new emoji filter.
    pub fn new() -> Self {
        EmojiCharFilter
    }

    /// Whether `c` is removed by this filter.
    pub fn is_removed(c: char) -> bool {
        u32::from(c) > 0xFFFF
    }
}

impl CharFilter for EmojiCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| !Self::is_removed(c)).collect()
    }

    fn name(&self) -> &'static str {
        "emoji"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplementary_emoji_removed() {
        let filter = EmojiCharFilter::new();
        assert_eq!(filter.filter("fun 😀🎉"), "fun ");
        assert_eq!(filter.filter("🚀launch"), "launch");
    }

    #[test]
    fn test_bmp_symbols_survive() {
        let filter = EmojiCharFilter::new();
        assert_eq!(filter.filter("love \u{2764} it \u{263A}"), "love \u{2764} it \u{263A}");
        assert_eq!(filter.filter("café"), "café");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(EmojiCharFilter::new().name(), "emoji");
    }
}
