//! Token types shared by the analysis stages.
//!
//! Tokens travel between stages as plain strings: a token sequence is a
//! [`Tokens`] (`Vec<String>`). Joining a sequence with single spaces and
//! tokenizing it again yields the same sequence, so the joined form is an
//! equally valid external representation.
//!
//! Linguistic stages ask a [`LanguageModel`](crate::analysis::model::LanguageModel)
//! for richer per-token annotations, represented by [`AnalyzedToken`].
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::token::{AnalyzedToken, DepRel, PosTag};
//!
//! let token = AnalyzedToken::new("running", 0)
//!     .with_lemma("run")
//!     .with_pos(PosTag::Verb);
//!
//! assert_eq!(token.lemma, "run");
//! assert_eq!(token.head, 0);
//! assert_eq!(token.dep, DepRel::Root);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The canonical token sequence exchanged between stages.
pub type Tokens = Vec<String>;

/// Coarse part-of-speech classes (a subset of the Universal Dependencies set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Nouns
    Noun,
    /// Main verbs
    Verb,
    /// Adjectives
    Adj,
    /// Adverbs
    Adv,
    /// Pronouns
    Pron,
    /// Determiners
    Det,
    /// Prepositions and postpositions
    Adp,
    /// Auxiliary and modal verbs
    Aux,
    /// Coordinating conjunctions
    Cconj,
    /// Subordinating conjunctions
    Sconj,
    /// Particles, including negation cues
    Part,
    /// Numerals
    Num,
    /// Punctuation
    Punct,
    /// Interjections
    Intj,
    /// Anything else
    Other,
}

impl PosTag {
    /// Whether this is an open word class that carries content.
    pub fn is_content(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Verb | PosTag::Adj | PosTag::Adv)
    }

    /// Parse a tag name as it appears in lexicon files (case-insensitive).
    pub fn parse(name: &str) -> Option<PosTag> {
        let tag = match name.to_ascii_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adj,
            "ADV" => PosTag::Adv,
            "PRON" => PosTag::Pron,
            "DET" => PosTag::Det,
            "ADP" => PosTag::Adp,
            "AUX" => PosTag::Aux,
            "CCONJ" => PosTag::Cconj,
            "SCONJ" => PosTag::Sconj,
            "PART" => PosTag::Part,
            "NUM" => PosTag::Num,
            "PUNCT" => PosTag::Punct,
            "INTJ" => PosTag::Intj,
            "X" | "OTHER" => PosTag::Other,
            _ => return None,
        };
        Some(tag)
    }

    /// The upper-case tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Num => "NUM",
            PosTag::Punct => "PUNCT",
            PosTag::Intj => "INTJ",
            PosTag::Other => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic relation between a token and its head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepRel {
    /// The token has no governing head (its head is itself)
    Root,
    /// The token negates its head
    Neg,
    /// Any other dependency the model does not distinguish
    Dep,
}

/// A token annotated by a language model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    /// Surface form as it appeared in the token sequence
    pub text: String,

    /// Dictionary base form (the surface form when unknown)
    pub lemma: String,

    /// Part-of-speech class chosen in context
    pub pos: PosTag,

    /// Index of the governing token; equal to the token's own index for roots
    pub head: usize,

    /// Relation to `head`
    pub dep: DepRel,
}

impl AnalyzedToken {
    /// Create a root token at `index` whose lemma is its surface form.
    pub fn new<S: Into<String>>(text: S, index: usize) -> Self {
        let text = text.into();
        AnalyzedToken {
            lemma: text.clone(),
            text,
            pos: PosTag::Other,
            head: index,
            dep: DepRel::Root,
        }
    }

    /// Set the lemma.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Set the part-of-speech tag.
    pub fn with_pos(mut self, pos: PosTag) -> Self {
        self.pos = pos;
        self
    }

    /// Attach this token to `head` with relation `dep`.
    pub fn with_head(mut self, head: usize, dep: DepRel) -> Self {
        self.head = head;
        self.dep = dep;
        self
    }

    /// Whether this token negates its head.
    pub fn is_negation(&self) -> bool {
        self.dep == DepRel::Neg
    }
}

impl fmt::Display for AnalyzedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.pos)
    }
}
