//! English word tokenizer.
//!
//! Splits on whitespace, then refines each chunk:
//!
//! - leading and trailing non-alphanumeric characters become tokens of their own
//!   (`"wow!!"` → `wow ! !`),
//! - English clitics are split from their host (`don't` → `do n't`,
//!   `she's` → `she 's`, `can't` → `ca n't`), and `cannot` → `can not`,
//! - internal punctuation is kept (`3.14`, `e-mail`, `x.co`).
//!
//! Every token produced is a fixed point of the tokenizer, so joining the
//! output with single spaces and tokenizing again gives the same sequence.

use crate::analysis::token::Tokens;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Clitics split from the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'m", "'d"];

/// A contraction-aware English tokenizer.
#[derive(Clone, Debug, Default)]
pub struct EnglishTokenizer;

impl EnglishTokenizer {
    /// Create a new English tokenizer.
    pub fn new() -> Self {
        EnglishTokenizer
    }

    fn is_clitic(chunk: &str) -> bool {
        CLITICS.iter().any(|c| chunk.eq_ignore_ascii_case(c))
    }

    /// Length in bytes of the clitic ending `word`, if `word` is longer than it.
    fn clitic_suffix(word: &str) -> Option<usize> {
        CLITICS.iter().map(|c| c.len()).find(|&len| {
            word.len() > len
                && word.is_char_boundary(word.len() - len)
                && Self::is_clitic(&word[word.len() - len..])
        })
    }

    fn split_chunk(chunk: &str, out: &mut Tokens) {
        // tokens split off the end, in reverse order
        let mut tail: Vec<String> = Vec::new();
        let mut rest = chunk;

        while !rest.is_empty() {
            if Self::is_clitic(rest) {
                out.push(rest.to_string());
                break;
            }

            let core = rest.trim_start_matches(|c: char| !c.is_alphanumeric());
            out.extend(rest[..rest.len() - core.len()].chars().map(String::from));
            let word = core.trim_end_matches(|c: char| !c.is_alphanumeric());
            tail.extend(core[word.len()..].chars().rev().map(String::from));

            if let Some(len) = Self::clitic_suffix(word) {
                let cut = word.len() - len;
                tail.push(word[cut..].to_string());
                rest = &word[..cut];
                continue;
            }

            if word.eq_ignore_ascii_case("cannot") {
                out.push(word[..3].to_string());
                out.push(word[3..].to_string());
            } else if !word.is_empty() {
                out.push(word.to_string());
            }
            break;
        }

        out.extend(tail.into_iter().rev());
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Result<Tokens> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            Self::split_chunk(chunk, &mut tokens);
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Tokens {
        EnglishTokenizer::new().tokenize(text).unwrap()
    }

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(tokenize("check this out"), vec!["check", "this", "out"]);
        assert_eq!(tokenize("  spaced   out  "), vec!["spaced", "out"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_punctuation_tokens() {
        assert_eq!(tokenize("wow!!"), vec!["wow", "!", "!"]);
        assert_eq!(tokenize("(hello)"), vec!["(", "hello", ")"]);
        assert_eq!(tokenize("pi is 3.14."), vec!["pi", "is", "3.14", "."]);
        assert_eq!(tokenize("e-mail me"), vec!["e-mail", "me"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("I'm"), vec!["I", "'m"]);
        assert_eq!(tokenize("they're"), vec!["they", "'re"]);
        assert_eq!(tokenize("can't"), vec!["ca", "n't"]);
        assert_eq!(tokenize("WON'T"), vec!["WO", "N'T"]);
        assert_eq!(tokenize("cannot"), vec!["can", "not"]);
        assert_eq!(tokenize("'tis"), vec!["'", "tis"]);
        assert_eq!(tokenize("it's."), vec!["it", "'s", "."]);
    }

    #[test]
    fn test_clitic_tokens_are_stable() {
        assert_eq!(tokenize("n't"), vec!["n't"]);
        assert_eq!(tokenize("'s"), vec!["'s"]);
    }

    #[test]
    fn test_round_trip() {
        let first = tokenize("I didn't say \"cannot\", y'all's (3.5) 😀!");
        let second = tokenize(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_long_symbol_runs() {
        let run = "…".repeat(200_000);
        let tokens = tokenize(&run);
        assert_eq!(tokens.len(), 200_000);
        assert!(tokens.iter().all(|t| t == "…"));

        let tokens = tokenize(&format!("({}wow{}", "☺".repeat(50_000), "!".repeat(50_000)));
        assert_eq!(tokens.len(), 100_002);
        assert_eq!(tokens[0], "(");
        assert_eq!(tokens[50_001], "wow");
        assert_eq!(tokens[100_001], "!");
    }

    #[test]
    fn test_stacked_clitics() {
        assert_eq!(tokenize("x-'s"), vec!["x", "-", "'s"]);
        let tokens = tokenize(&"n't".repeat(10_000));
        assert_eq!(tokens.len(), 10_000);
        assert!(tokens.iter().all(|t| t == "n't"));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(EnglishTokenizer::new().name(), "english");
    }
}
