//! Word-class lexicon used by the English model.
//!
//! The lexicon is a tab-separated text resource. Each non-comment line is
//! either a base form (`form<TAB>POS`) or an irregular inflection
//! (`form<TAB>POS<TAB>lemma`). Lines starting with `#` and blank lines are
//! ignored.
//!
//! ```text
//! run	VERB
//! ran	VERB	run
//! better	ADJ	good
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;

use crate::analysis::token::PosTag;
use crate::error::{Result, TweetnormError};

/// The lexicon shipped with the crate.
pub const BUILTIN_ENGLISH_LEXICON: &str = include_str!("../../../resources/english_lexicon.tsv");

/// Base forms, irregular forms and the word classes each form can take.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// Every known form with its possible classes, in file order.
    classes: HashMap<String, Vec<PosTag>>,
    /// Base forms per class.
    bases: HashSet<(String, PosTag)>,
    /// Irregular form and class to lemma.
    exceptions: HashMap<(String, PosTag), String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse lexicon text.
    ///
    /// Malformed lines (wrong field count, unknown class) are resource errors
    /// naming the offending line.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lexicon = Lexicon::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let malformed = |reason: &str| {
                TweetnormError::resource(format!("lexicon line {}: {reason}: {line:?}", index + 1))
            };

            let (form, tag) = match fields.as_slice() {
                [form, tag] | [form, tag, _] if !form.is_empty() => (*form, *tag),
                _ => return Err(malformed("expected 2 or 3 tab-separated fields")),
            };
            let pos = PosTag::parse(tag).ok_or_else(|| malformed("unknown word class"))?;

            match fields.get(2) {
                Some(lemma) => lexicon.add_exception(form, pos, lemma),
                None => lexicon.add_base(form, pos),
            }
        }

        Ok(lexicon)
    }

    /// Load a lexicon file.
    ///
    /// A missing or unreadable file is a resource error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TweetnormError::resource(format!("cannot read lexicon {}: {e}", path.display()))
        })?;
        let lexicon = Self::parse(&content)?;
        debug!("Loaded lexicon with {} forms from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Parse the built-in English lexicon.
    pub fn english() -> Result<Self> {
        Self::parse(BUILTIN_ENGLISH_LEXICON)
    }

    /// Register a base form.
    pub fn add_base(&mut self, form: &str, pos: PosTag) {
        let form = form.to_lowercase();
        self.add_class(&form, pos);
        self.bases.insert((form, pos));
    }

    /// Register an irregular form and its lemma.
    pub fn add_exception(&mut self, form: &str, pos: PosTag, lemma: &str) {
        let form = form.to_lowercase();
        self.add_class(&form, pos);
        self.exceptions.insert((form, pos), lemma.to_lowercase());
    }

    fn add_class(&mut self, form: &str, pos: PosTag) {
        let classes = self.classes.entry(form.to_string()).or_default();
        if !classes.contains(&pos) {
            classes.push(pos);
        }
    }

    /// Classes a lowercase form can take, in file order.
    pub fn classes(&self, form: &str) -> &[PosTag] {
        self.classes.get(form).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `form` is a base form of class `pos`.
    pub fn is_base(&self, form: &str, pos: PosTag) -> bool {
        self.bases.contains(&(form.to_string(), pos))
    }

    /// Lemma of an irregular form.
    pub fn exception(&self, form: &str, pos: PosTag) -> Option<&str> {
        self.exceptions
            .get(&(form.to_string(), pos))
            .map(String::as_str)
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the lexicon has no forms.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let lexicon =
            Lexicon::parse("# comment\nrun\tVERB\nran\tVERB\trun\n\nrun\tNOUN\n").unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.classes("run"), &[PosTag::Verb, PosTag::Noun]);
        assert!(lexicon.is_base("run", PosTag::Verb));
        assert!(!lexicon.is_base("ran", PosTag::Verb));
        assert_eq!(lexicon.exception("ran", PosTag::Verb), Some("run"));
        assert!(lexicon.classes("walk").is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let err = Lexicon::parse("run\tVERB\nbroken line\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        assert!(Lexicon::parse("run\tVRB\n").is_err());
        assert!(Lexicon::parse("a\tDET\tx\ty\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Lexicon::load("/no/such/lexicon.tsv");
        assert!(matches!(result, Err(TweetnormError::Resource(_))));
    }

    #[test]
    fn test_builtin_lexicon() {
        let lexicon = Lexicon::english().unwrap();

        assert!(lexicon.is_base("run", PosTag::Verb));
        assert!(lexicon.is_base("good", PosTag::Adj));
        assert_eq!(lexicon.exception("better", PosTag::Adj), Some("good"));
        assert_eq!(lexicon.exception("better", PosTag::Adv), Some("well"));
        assert_eq!(lexicon.exception("n't", PosTag::Part), Some("not"));
        assert_eq!(lexicon.classes("check"), &[PosTag::Verb, PosTag::Noun]);
    }
}
