//! Lexicon-backed English language model.
//!
//! The model does three things for a token sequence, left to right:
//!
//! 1. **Tagging.** Each token gets the word classes the [`Lexicon`] lists for
//!    it (or, for unlisted inflections, the classes whose detachment rules
//!    reach a listed base form). When more than one class is possible the
//!    previous token (intensifiers skipped) decides: after a pronoun, auxiliary, `to` or a negation
//!    cue a verb reading wins; after `be` or a linking verb an adjective
//!    reading wins; after a determiner, adjective or preposition a noun
//!    reading wins; after a main verb an adverb reading wins.
//! 2. **Lemmatization.** Irregular forms are looked up per class, then the
//!    WordNet-style detachment rules for the chosen class are tried against
//!    the base forms, including consonant undoubling (`running` → `run`).
//!    The other open classes are tried next. Forms nothing recognises keep
//!    their surface form.
//! 3. **Negation attachment.** A negation cue (`not`, `n't`, `no`, `never`,
//!    `nor`, `neither`, or a negated auxiliary such as `dont` / `isn't`)
//!    attaches to the first content word after it within a small window,
//!    skipping auxiliaries, pronouns and intensifiers. Punctuation, a
//!    conjunction or another cue ends the search. Without a following head
//!    the cue attaches to a preceding content word or auxiliary (`it is not`).
//!
//! # Examples
//!
//! ```
//! use tweetnorm::analysis::model::{EnglishModel, LanguageModel};
//! use tweetnorm::analysis::token::DepRel;
//!
//! let model = EnglishModel::new().unwrap();
//! let tokens: Vec<String> = ["she", "sings", "better"].iter().map(|s| s.to_string()).collect();
//! let analyzed = model.analyze(&tokens).unwrap();
//!
//! assert_eq!(analyzed[1].lemma, "sing");
//! assert_eq!(analyzed[2].lemma, "well");
//! assert_eq!(analyzed[0].dep, DepRel::Root);
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::analysis::model::{LanguageModel, Lexicon};
use crate::analysis::token::{AnalyzedToken, DepRel, PosTag};
use crate::error::Result;

/// Negation cues compared case-insensitively.
const NEGATION_CUES: &[&str] = &["not", "n't", "no", "never", "nor", "neither"];

/// Auxiliaries with a fused negation, compared with apostrophes removed.
const NEGATED_AUXILIARIES: &[&str] = &[
    "aint", "arent", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neednt", "shant", "shouldnt", "wasnt", "werent", "wont",
    "wouldnt",
];

/// Degree words skipped when looking for the word a cue negates.
const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "too", "that", "quite", "even", "ever", "at", "all", "just", "much",
    "as", "always", "exactly", "actually", "necessarily", "entirely", "completely", "totally",
];

/// Verbs whose complement is read as an adjective.
const LINKING_VERBS: &[&str] = &[
    "be", "feel", "look", "seem", "get", "become", "sound", "smell", "taste", "stay", "remain",
    "appear",
];

/// How many tokens after a cue may hold its head.
const NEGATION_WINDOW: usize = 3;

const OPEN_CLASSES: [PosTag; 4] = [PosTag::Verb, PosTag::Noun, PosTag::Adj, PosTag::Adv];

const NOUN_RULES: &[(&str, &str)] = &[
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ied", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
    ("s", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[
    ("iest", "y"),
    ("ier", "y"),
    ("est", "e"),
    ("est", ""),
    ("er", "e"),
    ("er", ""),
];

/// Suffixes after whose removal a doubled final consonant is also undone.
const UNDOUBLING_SUFFIXES: &[&str] = &["ing", "ed", "er", "est"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "ical",
];

/// A rule-based English tagger, lemmatizer and negation parser.
#[derive(Clone, Debug)]
pub struct EnglishModel {
    lexicon: Arc<Lexicon>,
}

impl EnglishModel {
    /// Create a model over the built-in lexicon.
    pub fn new() -> Result<Self> {
        Ok(Self::with_lexicon(Lexicon::english()?))
    }

    /// Create a model over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        EnglishModel {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Create a model from a lexicon file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_lexicon(Lexicon::load(path)?))
    }

    /// Get the lexicon used by this model.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Whether `word` is a negation cue.
    pub fn is_negation_cue(word: &str) -> bool {
        let lower = word.to_lowercase();
        if NEGATION_CUES.contains(&lower.as_str()) {
            return true;
        }
        let bare: String = lower.chars().filter(|&c| c != '\'' && c != '’').collect();
        NEGATED_AUXILIARIES.contains(&bare.as_str())
    }

    /// Lemma of `word` read as `pos`, or `None` if the lexicon cannot reach a
    /// base form.
    pub fn lemma(&self, word: &str, pos: PosTag) -> Option<String> {
        self.lemma_of(&word.to_lowercase(), pos)
    }

    fn lemma_of(&self, form: &str, pos: PosTag) -> Option<String> {
        if let Some(lemma) = self.lexicon.exception(form, pos) {
            return Some(lemma.to_string());
        }
        if self.lexicon.is_base(form, pos) {
            return Some(form.to_string());
        }
        self.detach(form, pos)
    }

    /// Lemma for the contextual class, falling back to the other open classes.
    fn lemma_in_context(&self, form: &str, pos: PosTag) -> Option<String> {
        self.lemma_of(form, pos).or_else(|| {
            OPEN_CLASSES
                .iter()
                .filter(|&&class| class != pos)
                .find_map(|&class| self.lemma_of(form, class))
        })
    }

    /// Apply the detachment rules for `pos`; the first candidate that is a
    /// base form wins.
    fn detach(&self, form: &str, pos: PosTag) -> Option<String> {
        let rules = match pos {
            PosTag::Noun => NOUN_RULES,
            PosTag::Verb => VERB_RULES,
            PosTag::Adj => ADJ_RULES,
            _ => return None,
        };

        for (suffix, replacement) in rules {
            let stem = match form.strip_suffix(suffix) {
                Some(stem) if !stem.is_empty() => stem,
                _ => continue,
            };

            let candidate = format!("{stem}{replacement}");
            if self.lexicon.is_base(&candidate, pos) {
                return Some(candidate);
            }

            if replacement.is_empty() && UNDOUBLING_SUFFIXES.contains(suffix) {
                if let Some(undoubled) = undouble(stem) {
                    if self.lexicon.is_base(undoubled, pos) {
                        return Some(undoubled.to_string());
                    }
                }
            }
        }

        None
    }

    fn choose_pos(&self, form: &str, prev: Option<&AnalyzedToken>) -> PosTag {
        if form.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punct;
        }
        if is_number(form) {
            return PosTag::Num;
        }

        let known = self.lexicon.classes(form);
        let inferred: Vec<PosTag>;
        let candidates = if known.is_empty() {
            inferred = OPEN_CLASSES
                .iter()
                .copied()
                .filter(|&class| self.detach(form, class).is_some())
                .collect();
            inferred.as_slice()
        } else {
            known
        };

        if candidates.is_empty() {
            if Self::is_negation_cue(form) {
                return PosTag::Aux;
            }
            return guess_by_suffix(form);
        }

        disambiguate(candidates, prev)
    }

    fn tag(&self, tokens: &[String]) -> Vec<AnalyzedToken> {
        let mut analyzed: Vec<AnalyzedToken> = Vec::with_capacity(tokens.len());

        for (index, text) in tokens.iter().enumerate() {
            let form = text.to_lowercase();
            let context = analyzed
                .iter()
                .rev()
                .find(|token| !INTENSIFIERS.contains(&token.text.to_lowercase().as_str()));
            let pos = self.choose_pos(&form, context);
            let lemma = self
                .lemma_in_context(&form, pos)
                .unwrap_or_else(|| text.clone());
            analyzed.push(AnalyzedToken::new(text.as_str(), index).with_pos(pos).with_lemma(lemma));
        }

        analyzed
    }

    fn attach_negations(&self, tokens: &mut [AnalyzedToken]) {
        for index in 0..tokens.len() {
            if !Self::is_negation_cue(&tokens[index].text) {
                continue;
            }

            let head = forward_head(tokens, index).or_else(|| backward_head(tokens, index));
            if let Some(head) = head {
                let cue = &mut tokens[index];
                cue.head = head;
                cue.dep = DepRel::Neg;
            }
        }
    }
}

impl LanguageModel for EnglishModel {
    fn analyze(&self, tokens: &[String]) -> Result<Vec<AnalyzedToken>> {
        let mut analyzed = self.tag(tokens);
        self.attach_negations(&mut analyzed);
        Ok(analyzed)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

fn disambiguate(candidates: &[PosTag], prev: Option<&AnalyzedToken>) -> PosTag {
    let first = candidates[0];
    let prev = match prev {
        Some(prev) if candidates.len() > 1 => prev,
        _ => return first,
    };

    let has = |pos: PosTag| candidates.contains(&pos);
    let prev_form = prev.text.to_lowercase();
    let prev_lemma = prev.lemma.to_lowercase();

    if has(PosTag::Verb)
        && (matches!(prev.pos, PosTag::Aux | PosTag::Pron | PosTag::Part)
            || prev_form == "to"
            || EnglishModel::is_negation_cue(&prev_form))
    {
        return PosTag::Verb;
    }
    if has(PosTag::Adj)
        && (prev_lemma == "be"
            || (prev.pos == PosTag::Verb && LINKING_VERBS.contains(&prev_lemma.as_str())))
    {
        return PosTag::Adj;
    }
    if has(PosTag::Noun)
        && matches!(prev.pos, PosTag::Det | PosTag::Adj | PosTag::Num | PosTag::Adp)
    {
        return PosTag::Noun;
    }
    if has(PosTag::Adv) && prev.pos == PosTag::Verb {
        return PosTag::Adv;
    }

    first
}

fn is_head_candidate(token: &AnalyzedToken) -> bool {
    token.pos.is_content()
        && !INTENSIFIERS.contains(&token.text.to_lowercase().as_str())
        && !EnglishModel::is_negation_cue(&token.text)
}

fn ends_clause(token: &AnalyzedToken) -> bool {
    matches!(token.pos, PosTag::Punct | PosTag::Cconj | PosTag::Sconj)
        || EnglishModel::is_negation_cue(&token.text)
}

fn forward_head(tokens: &[AnalyzedToken], cue: usize) -> Option<usize> {
    let end = tokens.len().min(cue + 1 + NEGATION_WINDOW);
    for index in (cue + 1)..end {
        let token = &tokens[index];
        if ends_clause(token) {
            break;
        }
        if is_head_candidate(token) {
            return Some(index);
        }
    }
    None
}

fn backward_head(tokens: &[AnalyzedToken], cue: usize) -> Option<usize> {
    for index in (cue.saturating_sub(NEGATION_WINDOW)..cue).rev() {
        let token = &tokens[index];
        if ends_clause(token) {
            break;
        }
        if is_head_candidate(token) || token.pos == PosTag::Aux {
            return Some(index);
        }
    }
    None
}

/// `stem` without its last character when it ends in a doubled consonant.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && last.is_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

fn is_number(form: &str) -> bool {
    form.chars().any(|c| c.is_ascii_digit())
        && form
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '%' | '/' | '-'))
}

fn guess_by_suffix(form: &str) -> PosTag {
    if form.ends_with("ly") {
        PosTag::Adv
    } else if form.ends_with("ing") || form.ends_with("ed") {
        PosTag::Verb
    } else if ADJECTIVE_SUFFIXES.iter().any(|suffix| form.ends_with(suffix)) {
        PosTag::Adj
    } else {
        PosTag::Noun
    }
}
