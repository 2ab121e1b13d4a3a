//! Char filter implementations for text normalization.
//!
//! Char filters run before tokenization and map a string to a string. They are
//! the noise-removal layer of the pipeline: URLs, mentions, hashtags,
//! punctuation and emoji are deleted here, and casing and whitespace are
//! normalized.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex removal (URLs, mentions, hashtags)
//! - [`punctuation::PunctuationCharFilter`] - Deletes ASCII punctuation
//! - [`emoji::EmojiCharFilter`] - Deletes supplementary-plane code points
//! - [`whitespace::WhitespaceCharFilter`] - Collapses and trims whitespace
//!
//! # Ordering
//!
//! URL, mention and hashtag removal must run before punctuation removal: the
//! patterns rely on `:`, `/`, `@` and `#`, which punctuation removal deletes.
//! [`remove_noise`] applies the filters in the required order.
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::char_filter::remove_noise;
//!
//! let cleaned = remove_noise("great game @bob #win http://t.co/x !!");
//! assert_eq!(cleaned, "great game    ");
//! ```

use std::sync::LazyLock;

pub mod emoji;
pub mod lowercase;
pub mod pattern_replace;
pub mod punctuation;
pub mod whitespace;

pub use emoji::EmojiCharFilter;
pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use punctuation::PunctuationCharFilter;
pub use whitespace::WhitespaceCharFilter;

/// Trait for character filters that transform text before tokenization.
///
/// Char filters are infallible and pure: the same input always produces the
/// same output.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

static NOISE_FILTERS: LazyLock<Vec<Box<dyn CharFilter>>> = LazyLock::new(|| {
    vec![
        Box::new(PatternReplaceCharFilter::urls()),
        Box::new(PatternReplaceCharFilter::mentions()),
        Box::new(PatternReplaceCharFilter::hashtags()),
        Box::new(PunctuationCharFilter::new()),
        Box::new(EmojiCharFilter::new()),
    ]
});

/// Remove URLs, mentions, hashtags, punctuation and emoji from `text`.
///
/// Casing and whitespace are left alone. The function is idempotent, and is
/// the identity on text that contains none of these.
pub fn remove_noise(text: &str) -> String {
    NOISE_FILTERS
        .iter()
        .fold(text.to_string(), |acc, filter| filter.filter(&acc))
}
