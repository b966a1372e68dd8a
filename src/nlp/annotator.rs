//! Linguistic annotation: raw text → (surface, tag, lemma) sentences.
//!
//! The [`Annotator`] trait is the boundary to whatever produces the
//! annotation model. [`HeuristicAnnotator`] is the built-in implementation:
//! regex sentence segmentation, a tokenizer that detaches terminal
//! punctuation and bound contraction suffixes, a closed-class plus
//! suffix-heuristic Penn Treebank tagger, and a rule-based lemmatizer. It is
//! deliberately shallow — good enough to drive the analyzer and the rewrite
//! passes deterministically, not a full tagger.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;
use crate::types::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken};

/// Converts raw text into an [`AnnotatedDocument`].
///
/// Implementations return an empty document for blank or whitespace-only
/// input and must not fail on well-formed text.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument>;
}

// ============================================================================
// Segmentation and tokenization
// ============================================================================

/// A sentence: anything up to a run of terminal punctuation, with trailing
/// closers (quotes, brackets) attached.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^.!?\s][^.!?]*(?:[.!?]+["'\u{201D}\u{2019})\]]*|$)"#).unwrap());

/// A word (with embedded apostrophes), a number, or a single symbol.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]+(?:['\u{2019}][A-Za-z]+)*|\d+(?:[.,]\d+)*|\S").unwrap()
});

/// Bound suffixes split off their host word, longest first so `n't` wins
/// over `'t`-less matches.
const CLITIC_SUFFIXES: [&str; 7] = ["n't", "'s", "'m", "'re", "'ll", "'d", "'ve"];

fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let mut out = Vec::new();
    for m in TOKEN_RE.find_iter(sentence) {
        let word = m.as_str();
        let lower = word.to_lowercase();
        let mut split = false;
        if word.contains('\'') {
            for suffix in CLITIC_SUFFIXES {
                if lower.ends_with(suffix) && lower.len() > suffix.len() {
                    let cut = word.len() - suffix.len();
                    if !word.is_char_boundary(cut) {
                        continue;
                    }
                    out.push(word[..cut].to_string());
                    out.push(word[cut..].to_string());
                    split = true;
                    break;
                }
            }
        }
        if !split {
            out.push(word.to_string());
        }
    }
    out
}

// ============================================================================
// Tagging
// ============================================================================

static CLOSED_CLASS_TAGS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    let classes: [(&str, &[&str]); 10] = [
        (
            "DT",
            &[
                "the", "a", "an", "this", "that", "these", "those", "another", "each", "every",
                "some", "any", "no", "all", "both",
            ],
        ),
        (
            "IN",
            &[
                "in", "on", "at", "of", "for", "with", "by", "from", "about", "into", "through",
                "during", "after", "before", "between", "under", "over", "against", "without",
                "within", "upon", "among", "as", "if", "than", "because", "while", "since",
                "until", "unless", "although", "though", "whether",
            ],
        ),
        ("CC", &["and", "or", "but", "nor", "yet"]),
        ("TO", &["to"]),
        (
            "MD",
            &[
                "will", "would", "can", "could", "shall", "should", "may", "might", "must", "'ll",
                "'d",
            ],
        ),
        (
            "PRP",
            &[
                "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
                "yourself", "himself", "herself", "itself", "ourselves", "themselves",
            ],
        ),
        ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
        ("EX", &["there"]),
        ("WRB", &["when", "where", "why", "how"]),
        (
            "RB",
            &[
                "not", "n't", "never", "also", "very", "too", "quite", "just", "always", "often",
                "here", "now", "then", "so",
            ],
        ),
    ];
    for (tag, words) in classes {
        for w in words {
            m.insert(*w, tag);
        }
    }
    // Auxiliaries and clitics carry their own form-specific tags.
    for (w, tag) in [
        ("am", "VBP"),
        ("is", "VBZ"),
        ("are", "VBP"),
        ("was", "VBD"),
        ("were", "VBD"),
        ("be", "VB"),
        ("been", "VBN"),
        ("being", "VBG"),
        ("has", "VBZ"),
        ("have", "VBP"),
        ("had", "VBD"),
        ("does", "VBZ"),
        ("do", "VBP"),
        ("did", "VBD"),
        ("done", "VBN"),
        ("'s", "POS"),
        ("'m", "VBP"),
        ("'re", "VBP"),
        ("'ve", "VBP"),
    ] {
        m.insert(w, tag);
    }
    m
});

/// Frequent adjectives the suffix rules cannot catch.
static COMMON_ADJECTIVES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "bad", "big", "small", "happy", "sad", "perfect", "complex", "simple", "single",
        "numerous", "essential", "important", "many", "few", "new", "old", "high", "low", "long",
        "short", "round", "visible", "great", "true", "false", "clear", "careful", "such",
    ]
    .into_iter()
    .collect()
});

static BE_LEMMA_FORMS: [&str; 8] = ["is", "am", "are", "was", "were", "be", "being", "been"];

fn is_punctuation(word: &str) -> bool {
    word.chars().all(|c| !c.is_alphanumeric())
}

/// Assign a Penn Treebank tag. `prev` is the already-tagged preceding token,
/// used only to disambiguate `-ed` forms after an auxiliary.
fn tag_word(word: &str, index: usize, prev: Option<&AnnotatedToken>) -> String {
    if is_punctuation(word) {
        return word.to_string();
    }
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return "CD".to_string();
    }

    let lower = word.to_lowercase();
    if let Some(tag) = CLOSED_CLASS_TAGS.get(lower.as_str()) {
        return (*tag).to_string();
    }

    // All-caps initialisms and capitalized non-initial words read as proper nouns.
    let first_upper = word.chars().next().is_some_and(|c| c.is_uppercase());
    if word.len() > 1 && word.chars().all(|c| c.is_uppercase()) {
        return "NNP".to_string();
    }
    if first_upper && index > 0 {
        return "NNP".to_string();
    }

    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG".to_string();
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        // Past participle after an auxiliary, plain past otherwise.
        let after_aux = prev.is_some_and(|p| {
            BE_LEMMA_FORMS.contains(&p.lemma.as_str())
                || p.lemma == "have"
                || p.tag == "MD"
        });
        return if after_aux { "VBN" } else { "VBD" }.to_string();
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return "RB".to_string();
    }
    if COMMON_ADJECTIVES.contains(lower.as_str())
        || ["ous", "ful", "ive", "less", "able", "ible"]
            .iter()
            .any(|s| lower.len() > s.len() + 2 && lower.ends_with(s))
    {
        return "JJ".to_string();
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return "NNS".to_string();
    }
    "NN".to_string()
}

// ============================================================================
// Lemmatization
// ============================================================================

static IRREGULAR_LEMMAS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("is", "be"),
        ("am", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("doing", "do"),
        ("said", "say"),
        ("made", "make"),
        ("making", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("taking", "take"),
        ("went", "go"),
        ("gone", "go"),
        ("going", "go"),
        ("saw", "see"),
        ("seen", "see"),
        ("came", "come"),
        ("coming", "come"),
        ("got", "get"),
        ("getting", "get"),
        ("gave", "give"),
        ("given", "give"),
        ("giving", "give"),
        ("found", "find"),
        ("told", "tell"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("ran", "run"),
        ("running", "run"),
        ("using", "use"),
        ("used", "use"),
        ("generating", "generate"),
        ("generated", "generate"),
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
    ]
    .into_iter()
    .collect()
});

fn strip_plural(lower: &str) -> String {
    if lower.len() > 4 && lower.ends_with("ies") {
        format!("{}y", &lower[..lower.len() - 3])
    } else if lower.len() > 3
        && ["ses", "xes", "zes", "ches", "shes"]
            .iter()
            .any(|s| lower.ends_with(s))
    {
        lower[..lower.len() - 2].to_string()
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        lower[..lower.len() - 1].to_string()
    } else {
        lower.to_string()
    }
}

fn strip_suffix_dedupe(lower: &str, suffix: &str) -> String {
    let mut stem = lower[..lower.len() - suffix.len()].to_string();
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        // "stopped" → "stopp" → "stop"
        stem.pop();
    }
    stem
}

/// Derive a lemma from the surface form and its tag. Lemmas are lowercase;
/// punctuation lemmatizes to itself.
fn lemma_for(word: &str, tag: &str) -> String {
    if is_punctuation(word) {
        return word.to_string();
    }
    let lower = word.to_lowercase();
    if let Some(lemma) = IRREGULAR_LEMMAS.get(lower.as_str()) {
        return (*lemma).to_string();
    }
    match tag {
        "NNS" | "NNPS" | "VBZ" => strip_plural(&lower),
        "VBG" if lower.len() > 4 && lower.ends_with("ing") => strip_suffix_dedupe(&lower, "ing"),
        "VBD" | "VBN" if lower.len() > 4 && lower.ends_with("ied") => {
            format!("{}y", &lower[..lower.len() - 3])
        }
        "VBD" | "VBN" if lower.len() > 3 && lower.ends_with("ed") => {
            strip_suffix_dedupe(&lower, "ed")
        }
        _ => lower,
    }
}

// ============================================================================
// The built-in annotator
// ============================================================================

/// Self-contained rule-based annotator.
///
/// Tokenization is reversible against the engine's reconstruction rules:
/// terminal punctuation and the bound suffixes `'s n't 'm 're 'll 'd 've`
/// become their own tokens, so a no-op pipeline round-trips the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn annotate_sentence(&self, sentence: &str) -> AnnotatedSentence {
        let words = tokenize_sentence(sentence);
        let mut out: AnnotatedSentence = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let tag = tag_word(word, i, out.last());
            let lemma = lemma_for(word, &tag);
            out.push(AnnotatedToken::new(word.clone(), tag, lemma));
        }
        out
    }
}

impl Annotator for HeuristicAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument> {
        if text.trim().is_empty() {
            return Ok(AnnotatedDocument::default());
        }
        let sentences: Vec<AnnotatedSentence> = SENTENCE_RE
            .find_iter(text)
            .map(|m| self.annotate_sentence(m.as_str()))
            .filter(|s| !s.is_empty())
            .collect();
        Ok(AnnotatedDocument::new(sentences))
    }
}
