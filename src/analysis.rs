//! Text analysis building blocks.
//!
//! Everything a normalization stage needs lives here: character-level noise
//! filters, tokenizers, token filters, and the read-only linguistic resources
//! (stop-word sets and language models) they share.

pub mod char_filter;
pub mod model;
pub mod stopwords;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
